//! Static catalogs: the command reference and the progress sections
//!
//! Both are defined once and never mutated. Order is significant: search
//! results and the progress checklist are presented in catalog order.

use std::fmt;

/// Grouping used for colour coding in the command palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandCategory {
    Basic,
    Branch,
    Remote,
    Advanced,
}

impl CommandCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandCategory::Basic => "basic",
            CommandCategory::Branch => "branch",
            CommandCategory::Remote => "remote",
            CommandCategory::Advanced => "advanced",
        }
    }
}

impl fmt::Display for CommandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the searchable command reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    pub name: &'static str,
    pub description: &'static str,
    pub category: CommandCategory,
    /// Text copied to the clipboard
    pub command: &'static str,
    pub example: Option<&'static str>,
}

pub const COMMANDS: &[Command] = &[
    Command {
        name: "Initialize Repository",
        description: "Create a new Git repository",
        category: CommandCategory::Basic,
        command: "git init",
        example: Some("git init my-project"),
    },
    Command {
        name: "Clone Repository",
        description: "Clone a repository from remote",
        category: CommandCategory::Remote,
        command: "git clone <url>",
        example: Some("git clone https://github.com/user/repo.git"),
    },
    Command {
        name: "Create Branch",
        description: "Create a new branch",
        category: CommandCategory::Branch,
        command: "git checkout -b <branch-name>",
        example: Some("git checkout -b feature/login"),
    },
    Command {
        name: "Stage Changes",
        description: "Add files to staging area",
        category: CommandCategory::Basic,
        command: "git add <file>",
        example: Some("git add . (add all files)"),
    },
    Command {
        name: "Commit Changes",
        description: "Commit staged changes",
        category: CommandCategory::Basic,
        command: "git commit -m \"message\"",
        example: Some("git commit -m \"Add login feature\""),
    },
    Command {
        name: "Push Changes",
        description: "Push commits to remote",
        category: CommandCategory::Remote,
        command: "git push <remote> <branch>",
        example: Some("git push origin main"),
    },
    Command {
        name: "Pull Changes",
        description: "Pull changes from remote",
        category: CommandCategory::Remote,
        command: "git pull <remote> <branch>",
        example: Some("git pull origin main"),
    },
    Command {
        name: "Merge Branch",
        description: "Merge a branch into current branch",
        category: CommandCategory::Branch,
        command: "git merge <branch>",
        example: Some("git merge feature/login"),
    },
    Command {
        name: "View Status",
        description: "Check repository status",
        category: CommandCategory::Basic,
        command: "git status",
        example: None,
    },
    Command {
        name: "View Commit History",
        description: "Show commit history",
        category: CommandCategory::Basic,
        command: "git log",
        example: Some("git log --oneline"),
    },
    Command {
        name: "Stash Changes",
        description: "Temporarily save changes",
        category: CommandCategory::Advanced,
        command: "git stash",
        example: Some("git stash pop (apply and remove stash)"),
    },
    Command {
        name: "Rebase Branch",
        description: "Reapply commits on top of another branch",
        category: CommandCategory::Advanced,
        command: "git rebase <branch>",
        example: Some("git rebase main"),
    },
];

/// A progress-tracked section with its checklist items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuideSection {
    pub id: &'static str,
    pub title: &'static str,
    pub subsections: &'static [&'static str],
}

impl GuideSection {
    /// Storage key of one checklist item: `"<sectionId>-<index>"`
    pub fn progress_key(&self, index: usize) -> String {
        progress_key(self.id, index)
    }
}

pub const GUIDE_SECTIONS: &[GuideSection] = &[
    GuideSection {
        id: "introduction",
        title: "Introduction",
        subsections: &["What is Git?", "What is GitHub?", "Key Concepts"],
    },
    GuideSection {
        id: "basic",
        title: "Basic Commands",
        subsections: &[
            "Initializing",
            "Staging",
            "Committing",
            "Checking Status",
            "Viewing History",
        ],
    },
    GuideSection {
        id: "branching",
        title: "Branching",
        subsections: &[
            "Creating Branches",
            "Switching Branches",
            "Merging Branches",
            "Deleting Branches",
        ],
    },
    GuideSection {
        id: "remote",
        title: "Remote Repositories",
        subsections: &[
            "Connecting to GitHub",
            "Pushing",
            "Pulling",
            "Pull Requests",
            "Cloning",
        ],
    },
    GuideSection {
        id: "advanced",
        title: "Advanced Operations",
        subsections: &[
            "Resolving Conflicts",
            "Reverting Changes",
            "Stashing",
            "Cherry-Picking",
            "Rebasing",
        ],
    },
];

pub fn progress_key(section_id: &str, index: usize) -> String {
    format!("{}-{}", section_id, index)
}

/// Denominator of the progress percentage
pub fn total_subsections() -> usize {
    GUIDE_SECTIONS.iter().map(|s| s.subsections.len()).sum()
}

/// Every key a completed checklist can contain, in catalog order
pub fn all_progress_keys() -> impl Iterator<Item = String> {
    GUIDE_SECTIONS
        .iter()
        .flat_map(|s| (0..s.subsections.len()).map(move |i| s.progress_key(i)))
}

pub fn find_section(id: &str) -> Option<&'static GuideSection> {
    GUIDE_SECTIONS.iter().find(|s| s.id == id)
}
