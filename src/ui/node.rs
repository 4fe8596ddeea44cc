//! src/ui/node.rs
//!
//! Recursive layout Node + Panel trait used across the UI.
//!
//! Besides splitting an area into rows or columns, nodes can be layered on
//! top of each other (`Stack`) and centered as modal overlays (`Popup`),
//! which is how the animated background sits under the shell and dialogs sit
//! over everything.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};
use ratatui::widgets::Clear;

/// Panel trait: any renderable surface implements this.
pub trait Panel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect);
}

/// Node tree used to compose the UI each frame. Panels borrow app state for
/// the lifetime `'a` of one draw.
pub enum Node<'a> {
    Group {
        direction: Direction,
        constraints: Vec<Constraint>,
        children: Vec<Node<'a>>,
    },
    /// Children drawn in order over the same area; later ones win.
    Stack { children: Vec<Node<'a>> },
    /// Child drawn on cleared cells, hiding whatever was below.
    Opaque { child: Box<Node<'a>> },
    /// Centered box of `width` x `height` cells (clamped to the area), cleared
    /// before the child draws.
    Popup {
        width: u16,
        height: u16,
        child: Box<Node<'a>>,
    },
    Leaf { panel: Box<dyn Panel + 'a> },
}

impl Node<'_> {
    /// Draw the node into the given area.
    pub fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        match self {
            Node::Group {
                direction,
                constraints,
                children,
            } => {
                let chunks = Layout::default()
                    .direction(*direction)
                    .constraints(constraints.clone())
                    .split(area);
                for (child, chunk) in children.iter().zip(chunks.iter()) {
                    child.draw(f, *chunk);
                }
            }
            Node::Stack { children } => {
                for child in children {
                    child.draw(f, area);
                }
            }
            Node::Opaque { child } => {
                f.render_widget(Clear, area);
                child.draw(f, area);
            }
            Node::Popup {
                width,
                height,
                child,
            } => {
                let inner = centered(area, *width, *height);
                f.render_widget(Clear, inner);
                child.draw(f, inner);
            }
            Node::Leaf { panel } => {
                panel.draw(f, area);
            }
        }
    }
}

/// A `width` x `height` rect centered in `area`, shrunk to fit.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}

/// Helper: create a group node.
pub fn group<'a>(
    direction: Direction,
    constraints: Vec<Constraint>,
    children: Vec<Node<'a>>,
) -> Node<'a> {
    Node::Group {
        direction,
        constraints,
        children,
    }
}

/// Helper: layer nodes over one another.
pub fn stack(children: Vec<Node<'_>>) -> Node<'_> {
    Node::Stack { children }
}

/// Helper: hide what is below a node.
pub fn opaque(child: Node<'_>) -> Node<'_> {
    Node::Opaque {
        child: Box::new(child),
    }
}

/// Helper: center a node as an overlay.
pub fn popup(width: u16, height: u16, child: Node<'_>) -> Node<'_> {
    Node::Popup {
        width,
        height,
        child: Box::new(child),
    }
}

/// Helper: create a leaf node.
pub fn leaf<'a>(panel: impl Panel + 'a) -> Node<'a> {
    Node::Leaf {
        panel: Box::new(panel),
    }
}
