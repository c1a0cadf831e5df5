//! Shared table rendering for search and featured output

use crossterm::{
    execute,
    style::{Color, ResetColor, SetForegroundColor},
};
use std::io;

use crate::core::media::MediaResult;
use crate::utils::text::fit_width;

const ACCENT: Color = Color::Rgb {
    r: 255,
    g: 165,
    b: 0,
};

fn accent_line(line: &str) {
    let _ = execute!(io::stdout(), SetForegroundColor(ACCENT));
    println!("{}", line);
    let _ = execute!(io::stdout(), ResetColor);
}

pub fn media_table(results: &[MediaResult]) {
    println!();
    accent_line("┌────┬──────┬────────────────────────────────────┬──────────────────────────────────────────────┐");
    accent_line("│ #  │ Conf │ Title                              │ URI                                          │");
    accent_line("├────┼──────┼────────────────────────────────────┼──────────────────────────────────────────────┤");

    for (i, result) in results.iter().enumerate() {
        let row = format!(
            "│{:>3} │ {:>3}  │ {} │ {} │",
            i + 1,
            result.match_confidence,
            fit_width(&result.title, 34),
            fit_width(&result.uri, 44),
        );
        accent_line(&row);
    }

    accent_line("└────┴──────┴────────────────────────────────────┴──────────────────────────────────────────────┘");
    println!();
}

pub fn media_detailed(results: &[MediaResult]) {
    for (i, result) in results.iter().enumerate() {
        accent_line("┌────────────────────────────────────────────────────────────────────────────────┐");
        accent_line(&format!("│ Result #{:<71} │", i + 1));
        accent_line("├────────────────────────────────────────────────────────────────────────────────┤");
        accent_line(&format!("│ Title: {} │", fit_width(&result.title, 71)));
        accent_line(&format!(
            "│ Confidence: {} │",
            fit_width(&result.match_confidence.to_string(), 66)
        ));
        accent_line(&format!(
            "│ Media type: {} │",
            fit_width(&format!("{:?}", result.media_type), 66)
        ));
        accent_line(&format!("│ URI: {} │", fit_width(&result.uri, 73)));
        if let Some(image) = &result.image {
            accent_line(&format!("│ Image: {} │", fit_width(image, 71)));
        }
        accent_line("└────────────────────────────────────────────────────────────────────────────────┘");
        println!();
    }
}
