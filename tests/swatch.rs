use termcolors::config::DisplayConfig;
use termcolors::swatch::{self, TrueColors};
use termcolors::{ColorLevel, ColorSupport};

const RESET: &str = "\x1b[0m";

fn render(write: fn(&mut Vec<u8>) -> std::io::Result<()>) -> String {
    let mut out = Vec::new();
    write(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn report(level: ColorLevel, display: &DisplayConfig) -> String {
    let mut out = Vec::new();
    swatch::write_report(&mut out, ColorSupport::new(level), display).unwrap();
    String::from_utf8(out).unwrap()
}

/// Rows of a grid, without the closing reset line
fn grid_rows(grid: &str) -> Vec<&str> {
    let rows: Vec<&str> = grid.lines().collect();
    assert_eq!(rows.last(), Some(&RESET), "grid ends with a reset line");
    rows[..rows.len() - 1].to_vec()
}

#[test]
fn test_16_color_grid() {
    let grid = render(swatch::write_16_colors);
    let rows = grid_rows(&grid);
    assert_eq!(rows.len(), 2);
    assert!(rows[0].starts_with("\x1b[30;7m    \x1b[31;7m    "));
    assert!(rows[0].ends_with("\x1b[37;7m    \x1b[0m"));
    assert!(rows[1].starts_with("\x1b[90;7m    "));
    assert!(rows[1].ends_with("\x1b[97;7m    \x1b[0m"));
    for row in rows {
        assert_eq!(row.matches(";7m").count(), 8);
    }
}

#[test]
fn test_256_color_grid() {
    let grid = render(swatch::write_256_colors);
    let rows = grid_rows(&grid);
    assert_eq!(rows.len(), 8);
    assert!(rows[0].starts_with("\x1b[48;5;0m \x1b[48;5;1m "));
    assert!(rows[7].ends_with("\x1b[48;5;255m \x1b[0m"));
    for row in rows {
        assert_eq!(row.matches("\x1b[48;5;").count(), 32);
    }
}

#[test]
fn test_truecolor_grid() {
    let grid = render(swatch::write_truecolors);
    let rows = grid_rows(&grid);
    assert_eq!(rows.len(), 32);
    assert!(rows[0].starts_with("\x1b[48;2;255;0;0m \x1b[48;2;255;1;0m "));
    for row in rows {
        assert_eq!(row.matches("\x1b[48;2;").count(), 48);
    }
}

#[test]
fn test_truecolor_walk_visits_the_hue_corners() {
    let colors: Vec<(u8, u8, u8)> = TrueColors::default().take(6 * 255).collect();
    for corner in [(255, 255, 0), (0, 255, 0), (0, 255, 255), (0, 0, 255), (255, 0, 255)] {
        assert!(colors.contains(&corner), "missing {:?}", corner);
    }

    // Every step moves exactly one channel
    for pair in colors.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let moved = [(a.0, b.0), (a.1, b.1), (a.2, b.2)]
            .iter()
            .filter(|(x, y)| x != y)
            .count();
        assert_eq!(moved, 1, "{:?} -> {:?}", a, b);
    }
}

#[test]
fn test_report_lines() {
    let display = DisplayConfig {
        show_swatches: false,
        ..DisplayConfig::default()
    };

    assert_eq!(
        report(ColorLevel::None, &display),
        "No Colors Supported\n256 Colors NOT Supported\nTruecolor NOT Supported\n"
    );
    assert_eq!(
        report(ColorLevel::Basic, &display),
        "16 Colors Supported\n256 Colors NOT Supported\nTruecolor NOT Supported\n"
    );
    assert_eq!(
        report(ColorLevel::Extended, &display),
        "16 Colors Supported\n256 Colors Supported\nTruecolor NOT Supported\n"
    );
    assert_eq!(
        report(ColorLevel::TrueColor, &display),
        "16 Colors Supported\n256 Colors Supported\nTruecolor Supported\n"
    );
}

#[test]
fn test_report_shows_every_grid_by_default() {
    let output = report(ColorLevel::None, &DisplayConfig::default());
    assert!(output.contains("\x1b[30;7m"));
    assert!(output.contains("\x1b[48;5;0m"));
    assert!(output.contains("\x1b[48;2;255;0;0m"));

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "No Colors Supported");
    // Title, two rows and the closing reset of the 16 color grid come first
    assert_eq!(lines[4], "256 Colors NOT Supported");
}

#[test]
fn test_report_can_hide_unsupported_grids() {
    let display = DisplayConfig {
        show_unsupported_swatches: false,
        ..DisplayConfig::default()
    };
    let output = report(ColorLevel::Basic, &display);
    assert!(output.contains("\x1b[30;7m"));
    assert!(!output.contains("\x1b[48;5;"));
    assert!(!output.contains("\x1b[48;2;"));
}
