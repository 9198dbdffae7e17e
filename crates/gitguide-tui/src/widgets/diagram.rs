//! Git diagrams: static sketches for command cards and the interactive
//! node graph on the visualization tab

use std::collections::BTreeSet;

use gitguide_app::diagram_state::DiagramState;
use gitguide_core::{ConnectionKind, DiagramKind, DiagramNode, DiagramPreset, NodeKind};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{styles, Theme};

use super::text;

/// Columns per 100 diagram units
const COLUMNS_PER_UNIT: u16 = 12;

fn sketch(kind: DiagramKind) -> &'static [&'static str] {
    match kind {
        DiagramKind::Workflow => &[
            "Working Directory",
            "    | git add",
            "Staging Area",
            "    | git commit",
            "Local Repository",
            "    | git push",
            "Remote (GitHub)",
        ],
        DiagramKind::Commit => &["o---o---o---*  <- HEAD", "            new commit"],
        DiagramKind::Branch => &[
            r"main     o---o---o",
            r"              \",
            r"feature        o---o",
        ],
        DiagramKind::Merge => &[
            r"main     o---o---o---M",
            r"              \     /",
            r"feature        o---o",
        ],
        DiagramKind::PushPull => &["Local  --push-->  GitHub", "Local  <--pull--  GitHub"],
        DiagramKind::Conflict => &[
            "<<<<<<< HEAD",
            "your change",
            "=======",
            "their change",
            ">>>>>>> feature",
        ],
        DiagramKind::General => &["o---o---o"],
    }
}

/// Highlight `*` markers inside an ASCII line
pub fn ascii_line(line: &str, theme: &Theme) -> Line<'static> {
    let p = &theme.palette;
    let mut spans = Vec::new();
    for (i, part) in line.split('*').enumerate() {
        if i > 0 {
            spans.push(Span::styled(
                "*",
                styles::accent_alt(p).add_modifier(Modifier::BOLD),
            ));
        }
        if !part.is_empty() {
            spans.push(Span::styled(part.to_string(), styles::accent(p)));
        }
    }
    Line::from(spans)
}

/// Indented sketch for a card's diagram
pub fn sketch_lines(kind: DiagramKind, theme: &Theme) -> Vec<Line<'static>> {
    sketch(kind)
        .iter()
        .map(|l| ascii_line(&format!("  {}", l), theme))
        .collect()
}

// ─────────────────────────────────────────────────────────────────
// Interactive node graph
// ─────────────────────────────────────────────────────────────────

fn node_text(node: &DiagramNode) -> String {
    match node.kind {
        NodeKind::Commit => format!("({})", node.label),
        NodeKind::Branch => format!("<{}>", node.label),
        NodeKind::Merge => format!("{{{}}}", node.label),
        NodeKind::Tag => format!("#{}", node.label),
    }
}

/// Placement of one node on the character grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Placed {
    col: u16,
    row: u16,
    width: u16,
}

impl Placed {
    fn anchor(&self) -> u16 {
        self.col + 1
    }

    fn end(&self) -> u16 {
        self.col + self.width
    }
}

fn place(preset: DiagramPreset) -> Vec<Placed> {
    let nodes = preset.nodes();
    let min_x = nodes.iter().map(|n| n.x).min().unwrap_or(0);
    let rows: BTreeSet<u16> = nodes.iter().map(|n| n.y).collect();

    nodes
        .iter()
        .map(|n| {
            let row = rows.iter().position(|y| *y == n.y).unwrap_or(0) as u16 * 2;
            Placed {
                col: (n.x - min_x) * COLUMNS_PER_UNIT / 100,
                row,
                width: text::width(&node_text(n)) as u16,
            }
        })
        .collect()
}

/// Rows and columns the graph needs
pub fn graph_size(preset: DiagramPreset) -> (u16, u16) {
    let placed = place(preset);
    let width = placed.iter().map(Placed::end).max().unwrap_or(0);
    let height = placed.iter().map(|p| p.row + 1).max().unwrap_or(0);
    (width, height)
}

pub struct NodeGraph<'a> {
    diagram: &'a DiagramState,
    theme: &'a Theme,
}

impl<'a> NodeGraph<'a> {
    pub fn new(diagram: &'a DiagramState, theme: &'a Theme) -> Self {
        Self { diagram, theme }
    }

    fn connection_style(&self, kind: ConnectionKind, active: bool) -> Style {
        let p = &self.theme.palette;
        if active {
            return styles::accent_bold(p);
        }
        match kind {
            ConnectionKind::Main => styles::text_muted(p),
            ConnectionKind::Branch => Style::default().fg(p.cyan),
            ConnectionKind::Merge => styles::accent_alt(p),
        }
    }

    fn node_style(&self, index: usize, node: &DiagramNode) -> Style {
        let p = &self.theme.palette;
        if index == self.diagram.cursor {
            return styles::focused_selected(p);
        }
        if self.diagram.active == Some(node.id) {
            return styles::accent_bold(p).add_modifier(Modifier::UNDERLINED);
        }
        match node.kind {
            NodeKind::Commit => styles::text_primary(p),
            NodeKind::Branch => Style::default().fg(p.cyan),
            NodeKind::Merge => styles::accent_alt(p),
            NodeKind::Tag => styles::warning(p),
        }
    }
}

impl Widget for NodeGraph<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let preset = self.diagram.preset;
        let nodes = preset.nodes();
        let placed = place(preset);

        let (graph_width, _) = graph_size(preset);
        let offset_x = area.x + area.width.saturating_sub(graph_width) / 2;
        let right = area.x.saturating_add(area.width);
        let bottom = area.y.saturating_add(area.height);

        let mut put = |x: u16, y: u16, s: &str, style: Style| {
            let (x, y) = (offset_x + x, area.y + y);
            if x < right && y < bottom {
                buf.set_stringn(x, y, s, (right - x) as usize, style);
            }
        };

        for conn in preset.connections() {
            let (Some(from), Some(to)) = (
                nodes.iter().position(|n| n.id == conn.from),
                nodes.iter().position(|n| n.id == conn.to),
            ) else {
                continue;
            };
            let (a, b) = (placed[from], placed[to]);
            let style = self.connection_style(conn.kind, self.diagram.is_connection_active(conn));

            if a.row != b.row {
                let (top, low) = (a.row.min(b.row), a.row.max(b.row));
                for row in top + 1..low {
                    put(a.anchor(), row, "|", style);
                }
            }
            let (left, right_node) = if a.col <= b.col { (a, b) } else { (b, a) };
            if right_node.col > left.end() {
                let start = if a.row == b.row { left.end() } else { left.anchor() + 1 };
                let dashes = "-".repeat(right_node.col.saturating_sub(start) as usize);
                put(start, b.row, &dashes, style);
            }
        }

        for (i, (node, at)) in nodes.iter().zip(&placed).enumerate() {
            put(at.col, at.row, &node_text(node), self.node_style(i, node));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_sketch_for_every_kind() {
        let theme = Theme::default();
        for kind in [
            DiagramKind::Workflow,
            DiagramKind::Commit,
            DiagramKind::Branch,
            DiagramKind::Merge,
            DiagramKind::PushPull,
            DiagramKind::Conflict,
            DiagramKind::General,
        ] {
            assert!(!sketch_lines(kind, &theme).is_empty());
        }
    }

    #[test]
    fn test_ascii_line_highlights_markers() {
        let theme = Theme::default();
        let line = ascii_line("o---*", &theme);
        assert_eq!(line.spans.len(), 2);
        assert_eq!(line.spans[1].content, "*");
    }

    #[test]
    fn test_graphs_fit_minimum_width() {
        for preset in DiagramPreset::ALL {
            let (width, height) = graph_size(preset);
            assert!(width <= 76, "{:?} is {} wide", preset, width);
            assert!(height <= 3);
        }
    }

    #[test]
    fn test_workflow_graph_renders_nodes_in_order() {
        let theme = Theme::default();
        let diagram = DiagramState::default();
        let mut term = TestTerminal::new();
        term.render_widget(NodeGraph::new(&diagram, &theme), Rect::new(0, 0, 80, 3));

        let line = term.content();
        let working = line.find("(Working)").expect("working");
        let remote = line.find("(Remote)").expect("remote");
        assert!(working < remote);
        assert!(term.buffer_contains("---"));
    }

    #[test]
    fn test_branching_graph_draws_vertical_connector() {
        let theme = Theme::default();
        let mut diagram = DiagramState::default();
        diagram.set_preset(DiagramPreset::Branching);
        let mut term = TestTerminal::new();
        term.render_widget(NodeGraph::new(&diagram, &theme), Rect::new(0, 0, 80, 3));

        assert!(term.line_contains(0, "<Branch>"));
        assert!(term.line_contains(1, "|"));
        assert!(term.line_contains(2, "{M}"));
    }

    #[test]
    fn test_active_connections_are_highlighted() {
        let theme = Theme::default();
        let mut diagram = DiagramState::default();
        diagram.cursor = 1;
        diagram.toggle_selected(); // staging
        diagram.cursor = 3;

        let mut term = TestTerminal::new();
        term.render_widget(NodeGraph::new(&diagram, &theme), Rect::new(0, 0, 80, 1));

        // First dash after "(Working)" belongs to the working -> staging link
        let (graph_width, _) = graph_size(DiagramPreset::Workflow);
        let offset = (80 - graph_width) / 2;
        let cell = &term.buffer()[(offset + 9, 0)];
        assert_eq!(cell.symbol(), "-");
        assert_eq!(cell.fg, theme.palette.accent);
    }
}
