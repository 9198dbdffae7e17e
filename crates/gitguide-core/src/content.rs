//! Static tutorial content: tabs, command cards, introduction text and FAQ

use crate::animations::AnimationKind;
use crate::diagram::DiagramKind;

/// Top-level tabs of the guide, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GuideTab {
    #[default]
    Introduction,
    Basic,
    Branching,
    Remote,
    Advanced,
    Faq,
    AdvancedViz,
}

impl GuideTab {
    pub const ALL: [GuideTab; 7] = [
        Self::Introduction,
        Self::Basic,
        Self::Branching,
        Self::Remote,
        Self::Advanced,
        Self::Faq,
        Self::AdvancedViz,
    ];

    /// Short label on the tab bar
    pub fn label(&self) -> &'static str {
        match self {
            GuideTab::Introduction => "Introduction",
            GuideTab::Basic => "Basic Commands",
            GuideTab::Branching => "Branching",
            GuideTab::Remote => "Remote Repos",
            GuideTab::Advanced => "Advanced",
            GuideTab::Faq => "FAQ",
            GuideTab::AdvancedViz => "Advanced Viz",
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            GuideTab::Introduction => "Introduction to Git & GitHub",
            GuideTab::Basic => "Basic Git Commands",
            GuideTab::Branching => "Branching & Merging",
            GuideTab::Remote => "Remote Repositories",
            GuideTab::Advanced => "Advanced Operations",
            GuideTab::Faq => "Frequently Asked Questions",
            GuideTab::AdvancedViz => "Advanced Git Visualizations",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            GuideTab::Introduction => "Understanding version control and collaboration",
            GuideTab::Basic => "Getting started with repositories, staging, and committing",
            GuideTab::Branching => "Creating branches, switching between them, and merging changes",
            GuideTab::Remote => "Working with GitHub and other remote repositories",
            GuideTab::Advanced => "Resolving conflicts, reverting changes, and more",
            GuideTab::Faq => "Common questions and answers about Git and GitHub",
            GuideTab::AdvancedViz => "Interactive visualizations of complex Git concepts",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }

    /// Command cards shown on this tab
    pub fn cards(&self) -> &'static [CommandCard] {
        match self {
            GuideTab::Basic => BASIC_CARDS,
            GuideTab::Branching => BRANCHING_CARDS,
            GuideTab::Remote => REMOTE_CARDS,
            GuideTab::Advanced => ADVANCED_CARDS,
            GuideTab::Introduction | GuideTab::Faq | GuideTab::AdvancedViz => &[],
        }
    }
}

/// A command walkthrough card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandCard {
    pub title: &'static str,
    pub description: &'static str,
    /// Shell snippet, one command or comment per line
    pub script: &'static [&'static str],
    pub explanation: &'static str,
    pub diagram: DiagramKind,
    pub animation: Option<AnimationKind>,
    /// Real-world examples, collapsed by default
    pub examples: &'static [&'static str],
}

// ─────────────────────────────────────────────────────────────────
// Basic Commands
// ─────────────────────────────────────────────────────────────────

const BASIC_CARDS: &[CommandCard] = &[
    CommandCard {
        title: "Initializing a Repository",
        description: "Create a new Git repository in your current directory",
        script: &[
            "# Navigate to your project directory",
            "cd my-project",
            "",
            "# Initialize a new Git repository",
            "git init",
        ],
        explanation: "The git init command creates a new Git repository. It adds a hidden .git directory to your project folder, which contains all the metadata and version history for your project.",
        diagram: DiagramKind::General,
        animation: None,
        examples: &[
            "Starting a new project: Create a folder for your project, navigate to it, and run git init to start tracking changes.",
            "Converting an existing project: If you have a project that isn't using Git yet, navigate to its directory and run git init to start tracking it.",
        ],
    },
    CommandCard {
        title: "Staging Changes",
        description: "Add files to the staging area before committing",
        script: &[
            "# Add a specific file to staging",
            "git add filename.txt",
            "",
            "# Add multiple files",
            "git add file1.txt file2.txt",
            "",
            "# Add all files in the current directory",
            "git add .",
        ],
        explanation: "The git add command adds changes to the staging area. This is a preparatory step before committing. You can add specific files or all changes at once.",
        diagram: DiagramKind::Commit,
        animation: None,
        examples: &[
            "Selective staging: Use git add file1.js file2.js to stage only specific files when you've made changes to multiple files but want to commit them separately.",
            "Adding all changes: After completing a feature, use git add . to stage all modified files for a single comprehensive commit.",
        ],
    },
    CommandCard {
        title: "Committing Changes",
        description: "Save staged changes to the repository",
        script: &[
            "# Commit with a message",
            "git commit -m \"Add new feature\"",
            "",
            "# Commit all modified files (skips staging)",
            "git commit -am \"Fix bugs\"",
        ],
        explanation: "The git commit command saves your staged changes to the repository with a descriptive message. This creates a new commit object in the Git database that contains a snapshot of your changes.",
        diagram: DiagramKind::Commit,
        animation: Some(AnimationKind::Commit),
        examples: &[
            "Feature completion: git commit -m \"Add user authentication feature\" to record the addition of a complete feature.",
            "Quick fix: git commit -am \"Fix navigation bar styling\" to stage and commit all changes in one command when making a quick fix.",
            "Conventional commits: git commit -m \"fix: resolve memory leak in image carousel\" to follow the conventional commits format for better changelog generation.",
        ],
    },
    CommandCard {
        title: "Checking Status",
        description: "View the state of your working directory and staging area",
        script: &["# Check status", "git status"],
        explanation: "The git status command shows the state of your working directory and staging area. It lets you see which changes have been staged, which haven't, and which files aren't being tracked by Git.",
        diagram: DiagramKind::General,
        animation: None,
        examples: &[
            "Before committing: Run git status to verify which files are staged and which are still untracked before making a commit.",
            "After pulling: Use git status to see if there are any conflicts or changes that need to be addressed after pulling from a remote repository.",
        ],
    },
    CommandCard {
        title: "Viewing History",
        description: "See the commit history of your repository",
        script: &[
            "# View commit history",
            "git log",
            "",
            "# View compact history",
            "git log --oneline",
            "",
            "# View history with graph",
            "git log --graph --oneline --all",
        ],
        explanation: "The git log command shows the commit history of your repository. You can see commit messages, authors, dates, and commit IDs. Various flags can be used to format the output.",
        diagram: DiagramKind::Branch,
        animation: None,
        examples: &[
            "Investigating a bug: Use git log to find when a particular bug was introduced by looking through commit history.",
            "Visualizing branch structure: git log --graph --oneline --all --decorate to see a visual representation of your branch structure and merge history.",
            "Finding specific changes: git log -p -S\"searchTerm\" to find commits that added or removed code containing \"searchTerm\".",
        ],
    },
];

// ─────────────────────────────────────────────────────────────────
// Branching
// ─────────────────────────────────────────────────────────────────

const BRANCHING_CARDS: &[CommandCard] = &[
    CommandCard {
        title: "Creating Branches",
        description: "Create a new branch to work on features or fixes",
        script: &[
            "# Create a new branch",
            "git branch feature-branch",
            "",
            "# Create and switch to a new branch",
            "git checkout -b feature-branch",
            "",
            "# Using the newer switch command (Git 2.23+)",
            "git switch -c feature-branch",
        ],
        explanation: "Branches allow you to develop features, fix bugs, or experiment without affecting the main codebase. The git branch command creates a new branch, while git checkout -b or git switch -c creates and switches to the new branch in one step.",
        diagram: DiagramKind::Branch,
        animation: Some(AnimationKind::Branch),
        examples: &[],
    },
    CommandCard {
        title: "Switching Branches",
        description: "Move between different branches",
        script: &[
            "# Switch to an existing branch",
            "git checkout branch-name",
            "",
            "# Using the newer switch command (Git 2.23+)",
            "git switch branch-name",
            "",
            "# List all branches",
            "git branch",
        ],
        explanation: "The git checkout or git switch command lets you navigate between branches. The git branch command without arguments lists all local branches, with the current branch highlighted.",
        diagram: DiagramKind::Branch,
        animation: None,
        examples: &[],
    },
    CommandCard {
        title: "Merging Branches",
        description: "Combine changes from different branches",
        script: &[
            "# First, switch to the target branch",
            "git checkout main",
            "",
            "# Merge another branch into the current branch",
            "git merge feature-branch",
        ],
        explanation: "The git merge command incorporates changes from one branch into another. You first switch to the branch that should receive the changes (often main), then merge the source branch (e.g., a feature branch).",
        diagram: DiagramKind::Merge,
        animation: Some(AnimationKind::Merge),
        examples: &[],
    },
    CommandCard {
        title: "Deleting Branches",
        description: "Remove branches after they're no longer needed",
        script: &[
            "# Delete a branch that has been merged",
            "git branch -d branch-name",
            "",
            "# Force delete a branch (even if not merged)",
            "git branch -D branch-name",
        ],
        explanation: "After merging a branch, you can delete it with git branch -d. If the branch contains changes that haven't been merged, you'll need to use -D to force deletion.",
        diagram: DiagramKind::Branch,
        animation: None,
        examples: &[],
    },
    CommandCard {
        title: "Viewing Branch History",
        description: "See the commit history of specific branches",
        script: &[
            "# View commit history of current branch",
            "git log",
            "",
            "# View commit history of specific branch",
            "git log branch-name",
            "",
            "# View branch structure visually",
            "git log --graph --oneline --all",
        ],
        explanation: "The git log command can show the commit history of specific branches. Adding the --graph flag creates a text-based visualization of the branch structure.",
        diagram: DiagramKind::Branch,
        animation: None,
        examples: &[],
    },
];

// ─────────────────────────────────────────────────────────────────
// Remote Repositories
// ─────────────────────────────────────────────────────────────────

const REMOTE_CARDS: &[CommandCard] = &[
    CommandCard {
        title: "Connecting to GitHub",
        description: "Link your local repository to a GitHub repository",
        script: &[
            "# Add a remote repository",
            "git remote add origin https://github.com/username/repository.git",
            "",
            "# Verify remote connections",
            "git remote -v",
        ],
        explanation: "The git remote add command connects your local repository to a remote repository (like one on GitHub). 'Origin' is the conventional name for the primary remote repository.",
        diagram: DiagramKind::PushPull,
        animation: None,
        examples: &[
            "Setting up a new project: After creating a repository on GitHub, connect your local project with git remote add origin https://github.com/username/my-project.git",
            "Adding multiple remotes: For open source contributions, you might have both origin (your fork) and upstream (the original repository) as remotes",
        ],
    },
    CommandCard {
        title: "Pushing to GitHub",
        description: "Upload your local commits to GitHub",
        script: &[
            "# Push current branch to remote",
            "git push origin branch-name",
            "",
            "# Push and set upstream (track remote branch)",
            "git push -u origin branch-name",
            "",
            "# Push all branches",
            "git push --all origin",
        ],
        explanation: "The git push command uploads your commits to the remote repository. The -u flag sets up tracking, which simplifies future push and pull commands.",
        diagram: DiagramKind::PushPull,
        animation: Some(AnimationKind::PushPull),
        examples: &[
            "First push: git push -u origin main to push your main branch and set up tracking",
            "Feature branch: git push origin feature-login to share a feature branch with your team",
            "Force push (use with caution): git push --force origin branch-name when you've rewritten history locally",
        ],
    },
    CommandCard {
        title: "Pulling from GitHub",
        description: "Download and integrate changes from GitHub",
        script: &[
            "# Pull changes from remote",
            "git pull origin branch-name",
            "",
            "# Pull with rebase instead of merge",
            "git pull --rebase origin branch-name",
        ],
        explanation: "The git pull command fetches changes from the remote repository and merges them into your current branch. It's essentially a combination of git fetch and git merge.",
        diagram: DiagramKind::PushPull,
        animation: None,
        examples: &[
            "Daily workflow: git pull origin main to get the latest changes from your team",
            "Clean history: git pull --rebase origin main to incorporate remote changes without creating merge commits",
            "Specific branch: git pull origin feature-auth to get updates to a feature branch you're collaborating on",
        ],
    },
    CommandCard {
        title: "Creating Pull Requests",
        description: "Request to merge your changes into another branch",
        script: &[
            "# Push your branch to GitHub first",
            "git push -u origin your-branch-name",
            "",
            "# Then create a pull request on GitHub.com",
            "# Navigate to your repository > Pull requests > New pull request",
            "# Select the base branch and your branch, then create the pull request",
        ],
        explanation: "Pull requests are a GitHub feature that lets you notify others about changes you've pushed to a branch. They're central to collaborative workflows, allowing code review and discussion before changes are merged.",
        diagram: DiagramKind::PushPull,
        animation: Some(AnimationKind::PullRequest),
        examples: &[
            "Feature completion: Create a pull request when you've finished a feature and want it reviewed before merging to main",
            "Bug fix: Submit a pull request for a critical bug fix that needs immediate review",
            "Open source contribution: Submit a pull request to an open source project after forking and making improvements",
        ],
    },
    CommandCard {
        title: "Cloning Repositories",
        description: "Create a local copy of a GitHub repository",
        script: &[
            "# Clone a repository",
            "git clone https://github.com/username/repository.git",
            "",
            "# Clone to a specific directory",
            "git clone https://github.com/username/repository.git my-directory",
            "",
            "# Clone a specific branch",
            "git clone -b branch-name https://github.com/username/repository.git",
        ],
        explanation: "The git clone command creates a copy of a remote repository on your local machine. It automatically sets up the remote connection and checks out the default branch.",
        diagram: DiagramKind::PushPull,
        animation: None,
        examples: &[
            "Starting with an existing project: git clone https://github.com/organization/project.git to get a complete copy of the repository",
            "Specific version: git clone -b v2.0 https://github.com/username/app.git to clone a specific tagged version",
            "Shallow clone: git clone --depth=1 https://github.com/username/large-repo.git to clone only the latest commit (useful for large repositories)",
        ],
    },
    CommandCard {
        title: "Working with Forks",
        description: "Contribute to projects you don't have direct access to",
        script: &[
            "# Add the original repository as a remote",
            "git remote add upstream https://github.com/original-owner/repository.git",
            "",
            "# Fetch changes from the original repository",
            "git fetch upstream",
            "",
            "# Merge changes from the original repository",
            "git merge upstream/main",
        ],
        explanation: "Forking is a GitHub feature that creates a copy of a repository under your account. You can then clone your fork, make changes, and submit pull requests to the original repository.",
        diagram: DiagramKind::PushPull,
        animation: None,
        examples: &[
            "Open source contribution: Fork a repository, clone your fork, create a branch for your changes, then submit a pull request",
            "Staying updated: Regularly fetch and merge from the upstream repository to keep your fork in sync",
            "Team workflow: In some teams, each developer works on their own fork of the main repository",
        ],
    },
];

// ─────────────────────────────────────────────────────────────────
// Advanced Operations
// ─────────────────────────────────────────────────────────────────

const ADVANCED_CARDS: &[CommandCard] = &[
    CommandCard {
        title: "Resolving Merge Conflicts",
        description: "Handle conflicting changes between branches",
        script: &[
            "# When a merge conflict occurs:",
            "# 1. Open the conflicted files and resolve the conflicts",
            "# 2. Add the resolved files",
            "git add resolved-file.txt",
            "",
            "# 3. Complete the merge",
            "git commit",
        ],
        explanation: "Merge conflicts occur when Git can't automatically merge changes. You'll need to manually edit the conflicted files, resolve the conflicts, then add and commit the resolved files.",
        diagram: DiagramKind::Conflict,
        animation: Some(AnimationKind::Conflict),
        examples: &[],
    },
    CommandCard {
        title: "Reverting Changes",
        description: "Undo commits while preserving history",
        script: &[
            "# Revert a specific commit",
            "git revert commit-hash",
            "",
            "# Revert the last commit",
            "git revert HEAD",
        ],
        explanation: "The git revert command creates a new commit that undoes the changes made in a previous commit. This is a safe way to undo changes because it doesn't alter the commit history.",
        diagram: DiagramKind::General,
        animation: None,
        examples: &[],
    },
    CommandCard {
        title: "Resetting Changes",
        description: "Move the branch pointer to a different commit",
        script: &[
            "# Soft reset (keeps changes staged)",
            "git reset --soft commit-hash",
            "",
            "# Mixed reset (keeps changes unstaged)",
            "git reset commit-hash",
            "",
            "# Hard reset (discards changes)",
            "git reset --hard commit-hash",
        ],
        explanation: "The git reset command moves the branch pointer to a different commit. The --soft flag keeps your changes staged, the default (--mixed) keeps your changes but unstaged, and --hard discards your changes entirely.",
        diagram: DiagramKind::General,
        animation: None,
        examples: &[],
    },
    CommandCard {
        title: "Stashing Changes",
        description: "Temporarily save changes without committing",
        script: &[
            "# Stash current changes",
            "git stash",
            "",
            "# List stashes",
            "git stash list",
            "",
            "# Apply most recent stash",
            "git stash apply",
            "",
            "# Apply specific stash",
            "git stash apply stash@{n}",
            "",
            "# Remove most recent stash",
            "git stash drop",
        ],
        explanation: "The git stash command temporarily saves your changes so you can switch branches without committing. You can later reapply these changes with git stash apply.",
        diagram: DiagramKind::General,
        animation: None,
        examples: &[],
    },
    CommandCard {
        title: "Cherry-Picking Commits",
        description: "Apply specific commits from one branch to another",
        script: &[
            "# Cherry-pick a specific commit",
            "git cherry-pick commit-hash",
            "",
            "# Cherry-pick multiple commits",
            "git cherry-pick commit-hash-1 commit-hash-2",
            "",
            "# Cherry-pick without committing",
            "git cherry-pick -n commit-hash",
        ],
        explanation: "The git cherry-pick command applies the changes from specific commits to your current branch. This is useful when you want to apply only certain changes from another branch.",
        diagram: DiagramKind::Branch,
        animation: None,
        examples: &[],
    },
    CommandCard {
        title: "Rebasing Branches",
        description: "Reapply commits on top of another branch",
        script: &[
            "# Rebase current branch onto another branch",
            "git rebase target-branch",
            "",
            "# Interactive rebase for editing commits",
            "git rebase -i HEAD~3",
        ],
        explanation: "The git rebase command reapplies your commits on top of another branch. This creates a linear history and can be cleaner than merging. Interactive rebasing (-i) allows you to edit, squash, or drop commits during the process.",
        diagram: DiagramKind::Branch,
        animation: Some(AnimationKind::Rebase),
        examples: &[],
    },
];

// ─────────────────────────────────────────────────────────────────
// Introduction
// ─────────────────────────────────────────────────────────────────

pub const APP_TITLE: &str = "Git & GitHub";
pub const APP_SUBTITLE: &str = "A Visual Guide for Beginners";

pub const WELCOME: &str = "This guide will walk you through common Git and GitHub command sequences with visual explanations. Select a section below to get started.";

pub const PRO_TIP: &str = "Git commands can be combined with flags to modify their behavior. For example, git commit -am \"message\" combines adding and committing in one step.";

/// A `(term, definition)` pair
pub type Definition = (&'static str, &'static str);

/// Headed paragraphs of the introduction tab
pub const INTRO_PARAGRAPHS: &[Definition] = &[
    (
        "What is Git?",
        "Git is a distributed version control system that tracks changes in your code over time. It allows you to revert to previous versions, compare changes, and collaborate with others. Unlike older version control systems, Git stores a complete copy of the repository on each developer's machine.",
    ),
    (
        "What is GitHub?",
        "GitHub is a cloud-based hosting service that lets you manage Git repositories. It provides a web interface to Git, along with features like pull requests, issues, and actions. GitHub makes it easier to collaborate on projects with other developers around the world.",
    ),
];

pub const KEY_CONCEPTS: &[Definition] = &[
    (
        "Repository",
        "A storage location for your project. It contains all of your project's files and the entire revision history.",
    ),
    (
        "Commit",
        "A snapshot of your repository at a specific point in time. Each commit has a unique identifier (hash) and includes information about what changed.",
    ),
    (
        "Branch",
        "A parallel version of your repository. Branches allow you to work on different features or fixes simultaneously without affecting the main codebase.",
    ),
    (
        "Merge",
        "Combining changes from different branches. Merging integrates the changes from one branch into another.",
    ),
    (
        "Pull Request",
        "A request to merge changes from one branch to another. Pull requests on GitHub provide a way to review code before it's merged.",
    ),
];

pub const WHY_GIT: &[Definition] = &[
    ("History", "Track changes to your code over time"),
    ("Collaboration", "Work with others on the same project"),
    ("Branching", "Develop features in isolation"),
    ("Backup", "Store your code safely in multiple locations"),
    ("Experimentation", "Try new ideas without risk"),
];

/// Quick reference groups: `(heading, [(command, meaning)])`
pub const QUICK_REFERENCE: &[(&str, &[Definition])] = &[
    (
        "Basic Commands",
        &[
            ("git init", "Initialize a repository"),
            ("git add .", "Stage all changes"),
            ("git commit -m \"message\"", "Commit changes"),
            ("git status", "Check status"),
        ],
    ),
    (
        "Branch Commands",
        &[
            ("git branch", "List branches"),
            ("git checkout -b name", "Create & switch branch"),
            ("git merge branch", "Merge branch into current"),
            ("git branch -d name", "Delete branch"),
        ],
    ),
];

// ─────────────────────────────────────────────────────────────────
// FAQ
// ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    /// Answer paragraphs; lines starting with `$ ` render as commands
    pub answer: &'static [&'static str],
}

pub const FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "What's the difference between Git and GitHub?",
        answer: &[
            "Git is a distributed version control system that tracks changes in your code. It runs locally on your computer.",
            "GitHub is a cloud-based hosting service for Git repositories. It adds collaboration features like pull requests, issues, and actions on top of Git.",
        ],
    },
    FaqEntry {
        question: "How do I undo my last commit?",
        answer: &[
            "To undo your last commit while keeping the changes in your working directory:",
            "$ git reset --soft HEAD~1",
            "To completely remove the last commit and all changes:",
            "$ git reset --hard HEAD~1",
            "To create a new commit that undoes the last commit (safer for shared branches):",
            "$ git revert HEAD",
        ],
    },
    FaqEntry {
        question: "What should I do if I have a merge conflict?",
        answer: &[
            "1. First, identify which files have conflicts using git status",
            "2. Open each conflicted file in your editor and look for the conflict markers (<<<<<<<, =======, and >>>>>>>)",
            "3. Edit the files to resolve the conflicts by choosing which changes to keep",
            "4. Remove the conflict markers",
            "5. Stage the resolved files with git add <filename>",
            "6. Complete the merge with git commit",
            "If the conflict is too complex, you can abort the merge with git merge --abort",
        ],
    },
    FaqEntry {
        question: "How do I contribute to an open source project on GitHub?",
        answer: &[
            "1. Fork the repository to your GitHub account",
            "2. Clone your fork to your local machine: git clone https://github.com/your-username/repository.git",
            "3. Create a new branch for your changes: git checkout -b feature-branch",
            "4. Make your changes and commit them",
            "5. Push your branch to your fork: git push origin feature-branch",
            "6. Go to the original repository on GitHub and create a pull request",
            "7. Describe your changes in the pull request",
            "Always check the project's contributing guidelines before submitting a pull request.",
        ],
    },
    FaqEntry {
        question: "What's the difference between merge and rebase?",
        answer: &[
            "Merge creates a new \"merge commit\" that combines the changes from both branches. It preserves the branch history exactly as it happened.",
            "$ git checkout main && git merge feature-branch",
            "Rebase moves or \"replays\" your branch commits on top of the latest version of the target branch. This creates a linear history but rewrites the commit history.",
            "$ git checkout feature-branch && git rebase main",
            "Important: Never rebase commits that have been pushed to a shared repository unless you're absolutely sure no one else is using them.",
        ],
    },
];
