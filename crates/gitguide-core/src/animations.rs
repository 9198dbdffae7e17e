//! Animation definitions: the named phases of each illustrated workflow

use std::time::Duration;

/// One phase of an animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationStep {
    pub name: &'static str,
    pub description: &'static str,
    /// Command shown alongside the phase, if any
    pub command: Option<&'static str>,
}

/// Every animated illustration the guide can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationKind {
    Commit,
    Branch,
    Merge,
    Rebase,
    PushPull,
    PullRequest,
    Conflict,
}

const COMMIT_STEPS: &[AnimationStep] = &[
    AnimationStep {
        name: "Edit files",
        description: "Make changes to your project files",
        command: None,
    },
    AnimationStep {
        name: "Stage changes",
        description: "Add modified files to the staging area",
        command: Some("git add ."),
    },
    AnimationStep {
        name: "Commit changes",
        description: "Create a permanent snapshot of your changes",
        command: Some("git commit -m \"Add feature\""),
    },
    AnimationStep {
        name: "View history",
        description: "See your new commit in the repository history",
        command: Some("git log --oneline"),
    },
];

const BRANCH_STEPS: &[AnimationStep] = &[
    AnimationStep {
        name: "Create branch",
        description: "A new branch starts from the latest commit on main",
        command: Some("git checkout -b feature"),
    },
    AnimationStep {
        name: "Add commits",
        description: "New commits land on the feature branch only",
        command: Some("git commit -m \"Work on feature\""),
    },
    AnimationStep {
        name: "Continue work",
        description: "Main and feature move forward independently",
        command: None,
    },
];

const MERGE_STEPS: &[AnimationStep] = &[
    AnimationStep {
        name: "Branches diverged",
        description: "Main and feature each have commits the other lacks",
        command: None,
    },
    AnimationStep {
        name: "Checkout main",
        description: "Switch to the branch that receives the changes",
        command: Some("git checkout main"),
    },
    AnimationStep {
        name: "Merge feature into main",
        description: "Git combines both histories with a merge commit",
        command: Some("git merge feature"),
    },
    AnimationStep {
        name: "Merge complete",
        description: "Main now contains the feature work",
        command: None,
    },
];

const REBASE_STEPS: &[AnimationStep] = &[
    AnimationStep {
        name: "Initial state",
        description: "Initial state: feature branch diverged from main",
        command: None,
    },
    AnimationStep {
        name: "New commits on main",
        description: "Step 1: New commits added to main",
        command: Some("git checkout main && git pull"),
    },
    AnimationStep {
        name: "Start rebase",
        description: "Step 2: Checkout feature branch and start rebase",
        command: Some("git checkout feature && git rebase main"),
    },
    AnimationStep {
        name: "Commits replayed",
        description: "Step 3: Feature commits replayed on top of main",
        command: Some("git rebase --continue"),
    },
];

const PUSH_PULL_STEPS: &[AnimationStep] = &[
    AnimationStep {
        name: "Push changes",
        description: "Local commits are uploaded to the remote repository",
        command: Some("git push origin main"),
    },
    AnimationStep {
        name: "Pull updates",
        description: "Remote commits are downloaded and merged locally",
        command: Some("git pull origin main"),
    },
];

const PULL_REQUEST_STEPS: &[AnimationStep] = &[
    AnimationStep {
        name: "Create PR",
        description: "Pull Request #42: Add new greeting functionality",
        command: Some("git push -u origin feature"),
    },
    AnimationStep {
        name: "Review",
        description: "Approved by reviewer. All checks have passed",
        command: None,
    },
    AnimationStep {
        name: "Merge",
        description: "Pull request successfully merged and closed",
        command: None,
    },
];

const CONFLICT_STEPS: &[AnimationStep] = &[
    AnimationStep {
        name: "Conflict detected",
        description: "Both branches changed the same line of greeting.js",
        command: Some("git merge feature"),
    },
    AnimationStep {
        name: "Resolve & commit",
        description: "Edit the file, keep the right lines, then commit",
        command: Some("git add greeting.js && git commit"),
    },
];

impl AnimationKind {
    pub const ALL: [AnimationKind; 7] = [
        Self::Commit,
        Self::Branch,
        Self::Merge,
        Self::Rebase,
        Self::PushPull,
        Self::PullRequest,
        Self::Conflict,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            AnimationKind::Commit => "Commit workflow",
            AnimationKind::Branch => "Branching",
            AnimationKind::Merge => "Merging",
            AnimationKind::Rebase => "Rebasing",
            AnimationKind::PushPull => "Push & pull",
            AnimationKind::PullRequest => "Pull request lifecycle",
            AnimationKind::Conflict => "Merge conflict",
        }
    }

    pub fn steps(&self) -> &'static [AnimationStep] {
        match self {
            AnimationKind::Commit => COMMIT_STEPS,
            AnimationKind::Branch => BRANCH_STEPS,
            AnimationKind::Merge => MERGE_STEPS,
            AnimationKind::Rebase => REBASE_STEPS,
            AnimationKind::PushPull => PUSH_PULL_STEPS,
            AnimationKind::PullRequest => PULL_REQUEST_STEPS,
            AnimationKind::Conflict => CONFLICT_STEPS,
        }
    }

    pub fn step_count(&self) -> usize {
        self.steps().len()
    }

    /// Cycle length before the speed multiplier is applied
    pub fn base_duration(&self) -> Duration {
        match self {
            AnimationKind::Commit
            | AnimationKind::Branch
            | AnimationKind::Merge
            | AnimationKind::Rebase => Duration::from_secs(4),
            AnimationKind::PushPull | AnimationKind::PullRequest | AnimationKind::Conflict => {
                Duration::from_secs(6)
            }
        }
    }

    /// Merge and rebase walkthroughs are stepped by hand from the start
    pub fn starts_in_manual(&self) -> bool {
        matches!(self, AnimationKind::Merge | AnimationKind::Rebase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_counts() {
        assert_eq!(AnimationKind::Commit.step_count(), 4);
        assert_eq!(AnimationKind::Branch.step_count(), 3);
        assert_eq!(AnimationKind::Merge.step_count(), 4);
        assert_eq!(AnimationKind::Rebase.step_count(), 4);
        assert_eq!(AnimationKind::PushPull.step_count(), 2);
        assert_eq!(AnimationKind::PullRequest.step_count(), 3);
        assert_eq!(AnimationKind::Conflict.step_count(), 2);
    }

    #[test]
    fn test_every_animation_has_at_least_two_steps() {
        for kind in AnimationKind::ALL {
            assert!(kind.step_count() >= 2, "{:?}", kind);
            assert!(kind.base_duration() > Duration::ZERO);
        }
    }

    #[test]
    fn test_rebase_commands() {
        let commands: Vec<_> = AnimationKind::Rebase
            .steps()
            .iter()
            .map(|s| s.command.unwrap_or(""))
            .collect();
        assert_eq!(
            commands,
            vec![
                "",
                "git checkout main && git pull",
                "git checkout feature && git rebase main",
                "git rebase --continue"
            ]
        );
    }
}
