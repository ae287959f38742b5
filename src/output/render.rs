//! Line rendering for listing items
//!
//! One annotated item becomes exactly one logical output line:
//!
//! ```text
//!  ── <label> / <description>
//! ```
//!
//! Multi-line descriptions rely on the resolver's re-indentation for
//! alignment; the renderer never re-wraps text.

use std::io;

use termcolor::{ColorSpec, WriteColor};

use crate::listing::{Annotated, ItemKind};

use super::theme::Theme;

/// Leading marker before every listing line.
pub const INDENT_MARKER: &str = " ── ";

/// Separator between label and description.
pub const SEPARATOR: &str = " / ";

/// Column where description text starts for an item with the given label
/// width. The resolver indents continuation lines to this column.
pub fn description_column(label_width: usize) -> usize {
    INDENT_MARKER.chars().count() + label_width + SEPARATOR.chars().count()
}

/// Write one item as a colorized, aligned line.
///
/// The name takes the kind's label color; the child-count suffix and
/// placeholder descriptions stay unstyled, so authored descriptions remain
/// visually distinct.
pub fn write_item<W: WriteColor>(out: &mut W, annotated: &Annotated, theme: &Theme) -> io::Result<()> {
    write!(out, "{INDENT_MARKER}")?;

    let label_spec = match annotated.item.kind {
        ItemKind::Directory => &theme.dir_label,
        ItemKind::File => &theme.file_label,
    };
    write_styled(out, theme, label_spec, &annotated.item.name)?;
    if let Some(suffix) = annotated.count_suffix() {
        write!(out, "{suffix}")?;
    }

    write!(out, "{SEPARATOR}")?;

    if annotated.description.is_authored() {
        write_styled(out, theme, &theme.description, annotated.description.text())?;
    } else {
        write!(out, "{}", annotated.description.text())?;
    }
    writeln!(out)
}

fn write_styled<W: WriteColor>(
    out: &mut W,
    theme: &Theme,
    spec: &ColorSpec,
    text: &str,
) -> io::Result<()> {
    if !theme.enabled {
        return write!(out, "{text}");
    }
    out.set_color(spec)?;
    write!(out, "{text}")?;
    out.reset()
}
