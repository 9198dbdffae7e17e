//! Interactive diagram selection on the visualization tab

use gitguide_core::{connection_is_active, DiagramConnection, DiagramNode, DiagramPreset};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagramState {
    pub preset: DiagramPreset,
    /// Node under the cursor
    pub cursor: usize,
    /// Selected node id
    pub active: Option<&'static str>,
}

impl DiagramState {
    pub fn set_preset(&mut self, preset: DiagramPreset) {
        self.preset = preset;
        self.cursor = 0;
        self.active = None;
    }

    pub fn next_preset(&mut self) {
        self.set_preset(self.preset.next());
    }

    pub fn previous_preset(&mut self) {
        self.set_preset(self.preset.previous());
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        if self.cursor + 1 < self.preset.nodes().len() {
            self.cursor += 1;
        }
    }

    pub fn cursor_node(&self) -> Option<&'static DiagramNode> {
        self.preset.nodes().get(self.cursor)
    }

    /// Select the node under the cursor; selecting it again clears it
    pub fn toggle_selected(&mut self) {
        let Some(node) = self.cursor_node() else {
            return;
        };
        self.active = if self.active == Some(node.id) {
            None
        } else {
            Some(node.id)
        };
    }

    pub fn active_node(&self) -> Option<&'static DiagramNode> {
        self.active.and_then(|id| self.preset.find_node(id))
    }

    pub fn is_connection_active(&self, conn: &DiagramConnection) -> bool {
        connection_is_active(conn, self.active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reselecting_clears_selection() {
        let mut d = DiagramState::default();
        d.toggle_selected();
        let first = d.preset.nodes()[0].id;
        assert_eq!(d.active, Some(first));
        d.toggle_selected();
        assert_eq!(d.active, None);
    }

    #[test]
    fn test_only_touching_connections_highlight() {
        let mut d = DiagramState::default();
        d.set_preset(DiagramPreset::Branching);
        d.cursor_right();
        d.toggle_selected();
        let id = d.active.unwrap();

        for conn in d.preset.connections() {
            assert_eq!(d.is_connection_active(conn), conn.from == id || conn.to == id);
        }
        assert!(d.preset.connections().iter().any(|c| d.is_connection_active(c)));
    }

    #[test]
    fn test_preset_change_clears_selection() {
        let mut d = DiagramState::default();
        d.cursor_right();
        d.toggle_selected();
        d.next_preset();
        assert_eq!(d.preset, DiagramPreset::Branching);
        assert_eq!(d.cursor, 0);
        assert!(d.active.is_none());
        d.previous_preset();
        d.previous_preset();
        assert_eq!(d.preset, DiagramPreset::Rebasing);
    }

    #[test]
    fn test_cursor_clamps_to_nodes() {
        let mut d = DiagramState::default();
        for _ in 0..50 {
            d.cursor_right();
        }
        assert_eq!(d.cursor, d.preset.nodes().len() - 1);
        d.cursor_left();
        assert_eq!(d.cursor, d.preset.nodes().len() - 2);
    }
}
