//! Diagram data: static card diagrams and interactive node graphs
//!
//! Nodes and connections are plain literals. Node ids are unique within a
//! preset; coordinates are in an abstract 650x250 canvas that the renderer
//! scales to the available cells.

/// Static illustration attached to a command card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagramKind {
    Workflow,
    Commit,
    Branch,
    Merge,
    PushPull,
    Conflict,
    General,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Commit,
    Branch,
    Merge,
    Tag,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectionKind {
    Main,
    Branch,
    Merge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagramNode {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: NodeKind,
    pub x: u16,
    pub y: u16,
    /// Shown in the info line when the node is active
    pub info: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagramConnection {
    pub from: &'static str,
    pub to: &'static str,
    pub kind: ConnectionKind,
}

impl DiagramConnection {
    /// A connection is highlighted when either end is the active node
    pub fn touches(&self, node_id: &str) -> bool {
        self.from == node_id || self.to == node_id
    }
}

pub fn connection_is_active(conn: &DiagramConnection, active: Option<&str>) -> bool {
    active.is_some_and(|id| conn.touches(id))
}

/// Interactive graphs on the visualization tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DiagramPreset {
    #[default]
    Workflow,
    Branching,
    Rebasing,
}

const fn node(
    id: &'static str,
    label: &'static str,
    kind: NodeKind,
    x: u16,
    y: u16,
    info: &'static str,
) -> DiagramNode {
    DiagramNode {
        id,
        label,
        kind,
        x,
        y,
        info,
    }
}

const fn conn(from: &'static str, to: &'static str, kind: ConnectionKind) -> DiagramConnection {
    DiagramConnection { from, to, kind }
}

const WORKFLOW_NODES: &[DiagramNode] = &[
    node("working", "Working", NodeKind::Commit, 100, 100, "Working Directory: where you edit your files (git status)"),
    node("staging", "Staging", NodeKind::Commit, 250, 100, "Staging Area: the \"index\" of changes queued for the next commit (git add filename)"),
    node("local", "Local", NodeKind::Commit, 400, 100, "Local Repository: committed history on your machine (git log)"),
    node("remote", "Remote", NodeKind::Commit, 550, 100, "Remote Repository: the shared copy on GitHub (git remote -v)"),
];

const WORKFLOW_CONNECTIONS: &[DiagramConnection] = &[
    conn("working", "staging", ConnectionKind::Main),
    conn("staging", "local", ConnectionKind::Main),
    conn("local", "remote", ConnectionKind::Main),
];

const BRANCHING_NODES: &[DiagramNode] = &[
    node("main1", "1", NodeKind::Commit, 100, 150, "First commit on main"),
    node("main2", "2", NodeKind::Commit, 200, 150, "Second commit on main; the feature branch starts here"),
    node("main3", "3", NodeKind::Commit, 300, 150, "Main keeps moving while the feature is developed"),
    node("branch1", "Branch", NodeKind::Branch, 200, 80, "git checkout -b feature creates the branch"),
    node("feature1", "A", NodeKind::Commit, 300, 80, "First commit on the feature branch"),
    node("feature2", "B", NodeKind::Commit, 400, 80, "Second commit on the feature branch"),
    node("merge", "M", NodeKind::Merge, 400, 150, "Merge commit joining feature into main (git merge feature)"),
];

const BRANCHING_CONNECTIONS: &[DiagramConnection] = &[
    conn("main1", "main2", ConnectionKind::Main),
    conn("main2", "main3", ConnectionKind::Main),
    conn("main3", "merge", ConnectionKind::Main),
    conn("main2", "branch1", ConnectionKind::Branch),
    conn("branch1", "feature1", ConnectionKind::Branch),
    conn("feature1", "feature2", ConnectionKind::Branch),
    conn("feature2", "merge", ConnectionKind::Merge),
];

const REBASING_NODES: &[DiagramNode] = &[
    node("main1", "1", NodeKind::Commit, 100, 150, "First commit on main"),
    node("main2", "2", NodeKind::Commit, 200, 150, "Branch point of the feature"),
    node("main3", "3", NodeKind::Commit, 300, 150, "New work on main after branching"),
    node("main4", "4", NodeKind::Commit, 400, 150, "Tip of main that the feature is rebased onto"),
    node("branch", "Branch", NodeKind::Branch, 200, 80, "Feature branch before the rebase"),
    node("feature1", "A", NodeKind::Commit, 300, 80, "Original feature commit A"),
    node("feature2", "B", NodeKind::Commit, 400, 80, "Original feature commit B"),
    node("rebase1", "A'", NodeKind::Commit, 500, 150, "A replayed on top of main with a new hash"),
    node("rebase2", "B'", NodeKind::Commit, 600, 150, "B replayed on top of A'"),
];

const REBASING_CONNECTIONS: &[DiagramConnection] = &[
    conn("main1", "main2", ConnectionKind::Main),
    conn("main2", "main3", ConnectionKind::Main),
    conn("main3", "main4", ConnectionKind::Main),
    conn("main4", "rebase1", ConnectionKind::Main),
    conn("rebase1", "rebase2", ConnectionKind::Main),
    conn("main2", "branch", ConnectionKind::Branch),
    conn("branch", "feature1", ConnectionKind::Branch),
    conn("feature1", "feature2", ConnectionKind::Branch),
];

impl DiagramPreset {
    pub const ALL: [DiagramPreset; 3] = [Self::Workflow, Self::Branching, Self::Rebasing];

    pub fn title(&self) -> &'static str {
        match self {
            DiagramPreset::Workflow => "Git Workflow",
            DiagramPreset::Branching => "Branching & Merging",
            DiagramPreset::Rebasing => "Rebasing",
        }
    }

    pub fn intro(&self) -> &'static str {
        match self {
            DiagramPreset::Workflow => {
                "The Git workflow involves four main areas. Select nodes to learn more about each area."
            }
            DiagramPreset::Branching => {
                "Branching allows parallel development, with changes merged back together."
            }
            DiagramPreset::Rebasing => {
                "Merge preserves history but creates a non-linear structure. Rebase creates a linear history but rewrites commits."
            }
        }
    }

    /// `(command, effect)` pairs listed under the graph
    pub fn commands(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            DiagramPreset::Workflow => &[
                ("git add", "Working → Staging"),
                ("git commit", "Staging → Local"),
                ("git push", "Local → Remote"),
                ("git pull", "Remote → Working/Local"),
            ],
            DiagramPreset::Branching => &[
                ("git branch feature", "Create branch"),
                ("git checkout feature", "Switch branch"),
                ("git merge feature", "Merge branch into current"),
            ],
            DiagramPreset::Rebasing => &[
                ("git rebase main", "Replay feature commits onto main"),
                (
                    "Warning",
                    "Never rebase commits that have been pushed to a shared repository!",
                ),
            ],
        }
    }

    pub fn nodes(&self) -> &'static [DiagramNode] {
        match self {
            DiagramPreset::Workflow => WORKFLOW_NODES,
            DiagramPreset::Branching => BRANCHING_NODES,
            DiagramPreset::Rebasing => REBASING_NODES,
        }
    }

    pub fn connections(&self) -> &'static [DiagramConnection] {
        match self {
            DiagramPreset::Workflow => WORKFLOW_CONNECTIONS,
            DiagramPreset::Branching => BRANCHING_CONNECTIONS,
            DiagramPreset::Rebasing => REBASING_CONNECTIONS,
        }
    }

    pub fn find_node(&self, id: &str) -> Option<&'static DiagramNode> {
        self.nodes().iter().find(|n| n.id == id)
    }

    pub fn next(self) -> Self {
        match self {
            DiagramPreset::Workflow => DiagramPreset::Branching,
            DiagramPreset::Branching => DiagramPreset::Rebasing,
            DiagramPreset::Rebasing => DiagramPreset::Workflow,
        }
    }

    pub fn previous(self) -> Self {
        self.next().next()
    }
}

/// Area descriptions for the workflow illustration: `(title, text, related commands)`
pub const WORKFLOW_AREAS: &[(&str, &str, &str)] = &[
    (
        "Working Directory",
        "This is where you modify files in your project. It contains all your project files and directories. Files here can be tracked (already in Git) or untracked (new files).",
        "git status, git add",
    ),
    (
        "Staging Area",
        "Also known as the \"index\", this is a preparatory area where you organize and prepare changes before permanently recording them in the repository.",
        "git add, git reset",
    ),
    (
        "Repository",
        "The .git directory where Git stores all the snapshots of your project. This contains your complete history and metadata about all commits and branches.",
        "git commit, git log",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_node_ids_unique_per_preset() {
        for preset in DiagramPreset::ALL {
            let ids: HashSet<_> = preset.nodes().iter().map(|n| n.id).collect();
            assert_eq!(ids.len(), preset.nodes().len(), "{:?}", preset);
        }
    }

    #[test]
    fn test_connections_reference_existing_nodes() {
        for preset in DiagramPreset::ALL {
            for c in preset.connections() {
                assert!(preset.find_node(c.from).is_some(), "{}", c.from);
                assert!(preset.find_node(c.to).is_some(), "{}", c.to);
            }
        }
    }

    #[test]
    fn test_connection_is_active() {
        let c = conn("main2", "branch1", ConnectionKind::Branch);
        assert!(connection_is_active(&c, Some("main2")));
        assert!(connection_is_active(&c, Some("branch1")));
        assert!(!connection_is_active(&c, Some("main1")));
        assert!(!connection_is_active(&c, None));
    }

    #[test]
    fn test_preset_cycle() {
        assert_eq!(DiagramPreset::Workflow.previous(), DiagramPreset::Rebasing);
        assert_eq!(DiagramPreset::Rebasing.next(), DiagramPreset::Workflow);
    }

    #[test]
    fn test_rebasing_layout() {
        let preset = DiagramPreset::Rebasing;
        assert_eq!(preset.nodes().len(), 9);
        assert_eq!(preset.find_node("rebase2").unwrap().label, "B'");
    }
}
