use colorful::{Colorful, RGB as ColorfulRgb};

/// Prints a confirmation line with a leading check mark
pub fn confirmation(log: &str) {
    println!(
        "{} {}",
        "✓".color(colors::indicator_good()).bold(),
        colors::gradient(log)
    );
}

/// Prints an error line with a leading cross mark
pub fn error(log: &str) {
    eprintln!("{} {}", "✗".color(colors::indicator_bad()).bold(), log);
}

/// Prints a colored log to the console (defaults to `tui::colors::dusk`)
pub fn print_color(log: &str, color: Option<ColorfulRgb>) {
    let color = color.unwrap_or(colors::dusk());
    println!("{}", log.color(color));
}

pub mod colors {
    use colorful::RGB as ColorfulRgb;
    use tiny_gradient::{GradientDisplay, GradientStr, RGB};

    pub fn indicator_good() -> ColorfulRgb {
        ColorfulRgb::new(132, 205, 155)
    }

    pub fn indicator_bad() -> ColorfulRgb {
        ColorfulRgb::new(255, 125, 127)
    }

    pub fn dusk() -> ColorfulRgb {
        ColorfulRgb::new(124, 207, 225)
    }

    pub fn gradient<'a>(log: &'a str) -> GradientDisplay<'a, [RGB; 4]> {
        GradientStr::gradient(
            log,
            [
                RGB::new(255, 198, 217),
                RGB::new(124, 207, 225),
                RGB::new(137, 203, 166),
                RGB::new(165, 213, 113),
            ],
        )
    }
}
