//! Output formatting for capacity summaries and surfaces.

use std::fmt::Write as _;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;

use lenscap_lib::SurfaceSummary;

use crate::terminal::{colors, format_units, supports_color, supports_unicode, ColorPalette};

/// Print the CLI banner.
///
/// Uses box-drawing characters when the locale advertises UTF-8 and falls
/// back to ASCII otherwise. Respects `NO_COLOR` and `TERM=dumb`.
pub fn print_logo() {
    let (orange, cyan, reset) = if supports_color() {
        (colors::ORANGE, colors::CYAN, colors::RESET)
    } else {
        ("", "", "")
    };

    if supports_unicode() {
        println!(
            "{cyan}╭──────────────────────────────────────╮{reset}
{cyan}│{orange}   L E N S C A P                      {cyan}│{reset}
{cyan}│{orange}   modelo de capacidad AR             {cyan}│{reset}
{cyan}╰──────────────────────────────────────╯{reset}"
        );
    } else {
        println!(
            "{orange}+--------------------------------------+
|  LENSCAP                             |
|  >> AR COATING CAPACITY MODEL        |
+--------------------------------------+{reset}"
        );
    }
}

/// Render a surface as an OEE × hours matrix of lenses/day.
///
/// Rows are OEE samples from lowest to highest and columns are hours samples.
/// The smallest value is highlighted in orange and the largest in green.
pub fn render_surface_table(summary: &SurfaceSummary, palette: &ColorPalette) -> String {
    let surface = &summary.surface;
    let mut buffer = String::new();

    let _ = writeln!(buffer, "{}{}{}", palette.white_bold, summary.title, palette.reset);
    let _ = writeln!(
        buffer,
        "{}{} (filas: {}, columnas: {}){}",
        palette.gray, summary.z_title, summary.y_title, summary.x_title, palette.reset
    );

    let cells: Vec<Vec<String>> = surface
        .z
        .iter()
        .map(|row| row.iter().map(|&v| format_units(v)).collect())
        .collect();
    let headers: Vec<String> = surface.hours.iter().map(|h| format!("{h}")).collect();
    let width = cells
        .iter()
        .flatten()
        .chain(headers.iter())
        .map(String::len)
        .max()
        .unwrap_or(1)
        + 2;

    let (lo, hi) = surface.z_range().unwrap_or((f64::NAN, f64::NAN));

    let _ = write!(buffer, "{}{:>6}{}", palette.cyan, "OEE\\h", palette.reset);
    for header in &headers {
        let _ = write!(buffer, "{}{:>width$}{}", palette.cyan, header, palette.reset);
    }
    buffer.push('\n');

    for ((row, values), oee) in cells.iter().zip(&surface.z).zip(&surface.oee) {
        let _ = write!(buffer, "{}{:>6.2}{}", palette.gray, oee, palette.reset);
        for (cell, &value) in row.iter().zip(values) {
            let color = if value == hi {
                palette.green
            } else if value == lo {
                palette.orange
            } else {
                ""
            };
            let reset = if color.is_empty() { "" } else { palette.reset };
            let _ = write!(buffer, "{color}{cell:>width$}{reset}");
        }
        buffer.push('\n');
    }

    buffer
}

/// Write `value` as pretty JSON followed by a newline.
pub fn write_json<T: Serialize, W: Write>(value: &T, mut writer: W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut writer, value).map_err(io::Error::other)?;
    writer.write_all(b"\n")?;
    writer.flush()
}

/// Whether `path` names a file rather than stdout (`None` or `-`).
pub fn is_file_output(path: Option<&Path>) -> bool {
    matches!(path, Some(p) if p != Path::new("-"))
}

/// Open the requested output destination; `None` and `-` mean stdout.
pub fn open_output(path: Option<&Path>) -> io::Result<Box<dyn Write>> {
    match path {
        Some(p) if is_file_output(path) => Ok(Box::new(io::BufWriter::new(File::create(p)?))),
        _ => Ok(Box::new(io::stdout().lock())),
    }
}
