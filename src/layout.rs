//! Screen layout via the Taffy flexbox engine.
//!
//! The screen is a fixed flex tree: a header row, a body row holding the
//! form panel and the table panel side by side, and a status row.
//!
//! ```text
//! ┌──────────────────── header (1) ───────────────────┐
//! │ form panel (fixed) │ table panel (flex-grow)      │
//! └──────────────────── status (1) ───────────────────┘
//! ```

use taffy::{AvailableSpace, Dimension, FlexDirection, Size, Style, TaffyTree};

use crate::types::Rect;

/// Width of the form panel in cells, border included.
pub const FORM_PANEL_WIDTH: u16 = 38;

/// Computed screen regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub form: Rect,
    pub table: Rect,
    pub status: Rect,
}

/// Compute the screen regions for a terminal of the given size.
pub fn compute(terminal_width: u16, terminal_height: u16) -> ScreenLayout {
    let mut tree: TaffyTree<()> = TaffyTree::new();

    let header = tree
        .new_leaf(Style {
            size: Size {
                width: Dimension::Percent(1.0),
                height: Dimension::Length(1.0),
            },
            flex_shrink: 0.0,
            ..Default::default()
        })
        .unwrap();

    let form = tree
        .new_leaf(Style {
            size: Size {
                width: Dimension::Length(FORM_PANEL_WIDTH as f32),
                height: Dimension::Auto,
            },
            flex_shrink: 0.0,
            ..Default::default()
        })
        .unwrap();

    let table = tree
        .new_leaf(Style {
            flex_grow: 1.0,
            ..Default::default()
        })
        .unwrap();

    let body = tree
        .new_with_children(
            Style {
                flex_direction: FlexDirection::Row,
                flex_grow: 1.0,
                size: Size {
                    width: Dimension::Percent(1.0),
                    height: Dimension::Auto,
                },
                ..Default::default()
            },
            &[form, table],
        )
        .unwrap();

    let status = tree
        .new_leaf(Style {
            size: Size {
                width: Dimension::Percent(1.0),
                height: Dimension::Length(1.0),
            },
            flex_shrink: 0.0,
            ..Default::default()
        })
        .unwrap();

    let root = tree
        .new_with_children(
            Style {
                flex_direction: FlexDirection::Column,
                size: Size {
                    width: Dimension::Length(terminal_width as f32),
                    height: Dimension::Length(terminal_height as f32),
                },
                ..Default::default()
            },
            &[header, body, status],
        )
        .unwrap();

    let available = Size {
        width: AvailableSpace::Definite(terminal_width as f32),
        height: AvailableSpace::Definite(terminal_height as f32),
    };
    tree.compute_layout(root, available).unwrap();

    // Taffy locations are parent-relative; fold in the body offset for
    // the two panels.
    let to_rect = |node, dx: u16, dy: u16| {
        let layout = tree.layout(node).unwrap();
        Rect::new(
            layout.location.x.round() as u16 + dx,
            layout.location.y.round() as u16 + dy,
            layout.size.width.round() as u16,
            layout.size.height.round() as u16,
        )
    };

    let body_rect = to_rect(body, 0, 0);
    ScreenLayout {
        header: to_rect(header, 0, 0),
        form: to_rect(form, body_rect.x, body_rect.y),
        table: to_rect(table, body_rect.x, body_rect.y),
        status: to_rect(status, 0, 0),
    }
}

// =============================================================================
// Tests
// =============================================================================
