//! Animated illustration for the focused card.
//!
//! A scene is three lines of ASCII art per step. The panel shows the
//! scene for the timeline's current step, the step list, an optional
//! callout with the step description, a particle track at `complex`
//! detail, and a progress gauge through the whole sequence.

use gitguide_app::{Timeline, ViewContext};
use gitguide_core::AnimationKind;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{LineGauge, Paragraph, Widget},
};

use crate::theme::{styles, Theme};

use super::{diagram, text};

/// Rows the panel wants, borders included
pub const PANEL_HEIGHT: u16 = 10;

type Scene = [&'static str; 3];

const COMMIT_SCENES: &[Scene] = &[
    [
        "Working          Staging          Repository",
        "[ app.js * ]     [          ]     o---o",
        "    ^ editing",
    ],
    [
        "Working          Staging          Repository",
        "[          ] --> [ app.js * ]     o---o",
        "                     ^ staged",
    ],
    [
        "Working          Staging          Repository",
        "[          ]     [          ] --> o---o---*",
        "                               new commit ^",
    ],
    [
        "$ git log --oneline",
        "* a1b2c3d Add feature",
        "o 9f8e7d6 Initial commit",
    ],
];

const BRANCH_SCENES: &[Scene] = &[
    [r"main     o---o---o", r"                  \", r"feature            *"],
    [r"main     o---o---o", r"                  \", r"feature            o---*"],
    [r"main     o---o---o-------*", r"                  \", r"feature            o---o"],
];

const MERGE_SCENES: &[Scene] = &[
    [r"main     o---o---o---o", r"              \", r"feature        o---o"],
    [r"main     o---o---o---*   (HEAD)", r"              \", r"feature        o---o"],
    [r"main     o---o---o---o---*", r"              \         /", r"feature        o---o---'"],
    [r"main     o---o---o---o---M   (HEAD)", r"              \         /", r"feature        o---o---'   merged"],
];

const REBASE_SCENES: &[Scene] = &[
    [r"main     o---o", r"              \", r"feature        A---B"],
    [r"main     o---o---C---D", r"              \", r"feature        A---B"],
    [r"main     o---o---C---D", r"              \        \", r"feature        A---B    *"],
    [r"main     o---o---C---D", r"                       \", r"feature                 A'--B'*"],
];

const PUSH_PULL_SCENES: &[Scene] = &[
    [
        "Local repo                 GitHub",
        "[ o---o---* ] --push-->   [ o---o---* ]",
        "your commits are uploaded",
    ],
    [
        "Local repo                 GitHub",
        "[ o---o---* ] <--pull--   [ o---o---* ]",
        "fetch + merge teammates' work",
    ],
];

const PULL_REQUEST_SCENES: &[Scene] = &[
    ["feature --> [ PR #42: Add feature ]", "", "status: open"],
    [
        "feature --> [ PR #42: Add feature ]",
        "             reviewer: looks good!",
        "status: approved",
    ],
    ["feature ==> main   [ PR #42 * merged ]", "", "status: merged"],
];

const CONFLICT_SCENES: &[Scene] = &[
    [
        "<<<<<<< HEAD   console.log(\"Hello\");",
        "=======",
        ">>>>>>> feature   console.log(\"Hi\");",
    ],
    ["console.log(\"Hello, world\"); *", "", "markers removed, file staged and committed"],
];

pub fn scenes(kind: AnimationKind) -> &'static [Scene] {
    match kind {
        AnimationKind::Commit => COMMIT_SCENES,
        AnimationKind::Branch => BRANCH_SCENES,
        AnimationKind::Merge => MERGE_SCENES,
        AnimationKind::Rebase => REBASE_SCENES,
        AnimationKind::PushPull => PUSH_PULL_SCENES,
        AnimationKind::PullRequest => PULL_REQUEST_SCENES,
        AnimationKind::Conflict => CONFLICT_SCENES,
    }
}

pub struct AnimationPanel<'a> {
    timeline: &'a Timeline,
    ctx: &'a ViewContext,
    theme: &'a Theme,
}

impl<'a> AnimationPanel<'a> {
    pub fn new(timeline: &'a Timeline, ctx: &'a ViewContext, theme: &'a Theme) -> Self {
        Self {
            timeline,
            ctx,
            theme,
        }
    }

    /// Badge describing how the timeline advances
    fn badge(&self) -> &'static str {
        let t = self.timeline;
        if t.is_manual() {
            "MANUAL"
        } else if self.ctx.timing.reduced_motion {
            "REDUCED MOTION"
        } else if !self.ctx.timing.enabled {
            "ANIMATIONS OFF"
        } else if t.is_playing() {
            "AUTO \u{25b6}"
        } else {
            "PAUSED"
        }
    }

    fn step_list(&self) -> Line<'static> {
        let p = &self.theme.palette;
        let icons = &self.theme.icons;
        let current = self.timeline.current();
        let mut spans = Vec::new();
        for (i, step) in self.timeline.kind().steps().iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" ", styles::text_muted(p)));
            }
            let (marker, style) = if i < current {
                (icons.step_done(), styles::success(p))
            } else if i == current {
                (icons.step_current(), styles::accent_bold(p))
            } else {
                (icons.step_pending(), styles::text_muted(p))
            };
            spans.push(Span::styled(format!("{} {}", marker, step.name), style));
        }
        Line::from(spans)
    }

    /// Dot track with a particle at the current point of the cycle
    fn particle_track(&self, width: u16) -> Line<'static> {
        let p = &self.theme.palette;
        let width = width as usize;
        if width == 0 {
            return Line::default();
        }
        let fraction = self.timeline.cycle_fraction(self.ctx.now);
        let at = ((fraction * (width - 1) as f64).round() as usize).min(width - 1);
        Line::from(vec![
            Span::styled("\u{00b7}".repeat(at), styles::text_muted(p)),
            Span::styled(self.theme.icons.particle(), styles::accent_alt(p)),
            Span::styled("\u{00b7}".repeat(width - 1 - at), styles::text_muted(p)),
        ])
    }
}

impl Widget for AnimationPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = &self.theme.palette;
        let kind = self.timeline.kind();
        let block = styles::glass_block(p, true)
            .title(Span::styled(format!(" {} ", kind.title()), styles::accent_bold(p)))
            .title_bottom(Line::from(vec![
                Span::styled(" m", styles::keybinding(p)),
                Span::styled(" mode ", styles::text_muted(p)),
                Span::styled("\u{2190}\u{2192}", styles::keybinding(p)),
                Span::styled(" step ", styles::text_muted(p)),
                Span::styled("R", styles::keybinding(p)),
                Span::styled(" reset ", styles::text_muted(p)),
                Span::styled("Space", styles::keybinding(p)),
                Span::styled(" play ", styles::text_muted(p)),
            ]));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let [badge_row, scene_area, track_row, steps_row, callout_row, gauge_row] =
            Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .areas(inner);

        let step = self.timeline.step();
        let badge = Line::from(vec![
            Span::styled(
                format!("Step {}/{}", self.timeline.current() + 1, self.timeline.step_count()),
                styles::text_secondary(p),
            ),
            Span::raw("  "),
            Span::styled(format!("[{}]", self.badge()), styles::warning(p)),
        ]);
        Paragraph::new(badge).render(badge_row, buf);

        let frames = scenes(kind);
        if let Some(scene) = frames.get(self.timeline.current()).or(frames.last()) {
            let lines: Vec<Line> = scene
                .iter()
                .map(|l| diagram::ascii_line(&format!(" {}", l), self.theme))
                .collect();
            Paragraph::new(lines).render(scene_area, buf);
        }

        if self.ctx.timing.shows_particles() && !self.timeline.is_static() {
            Paragraph::new(self.particle_track(track_row.width)).render(track_row, buf);
        }

        Paragraph::new(self.step_list()).render(steps_row, buf);

        if self.ctx.timing.shows_callouts() {
            let mut spans = vec![Span::styled(
                format!("{}: ", step.name),
                styles::heading(p),
            )];
            spans.push(Span::styled(step.description, styles::text_secondary(p)));
            if let Some(command) = step.command {
                spans.push(Span::styled("  $ ", styles::text_muted(p)));
                spans.push(Span::styled(command, styles::command(p)));
            }
            let line = Line::from(spans);
            let rendered: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
            if text::width(&rendered) <= callout_row.width as usize {
                Paragraph::new(line).render(callout_row, buf);
            } else {
                Paragraph::new(Line::styled(
                    text::truncate(step.description, callout_row.width as usize),
                    styles::text_secondary(p),
                ))
                .render(callout_row, buf);
            }
        }

        LineGauge::default()
            .ratio(self.timeline.cycle_fraction(self.ctx.now))
            .filled_style(styles::accent(p))
            .unfilled_style(styles::text_muted(p))
            .label("")
            .render(gauge_row, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gitguide_app::AnimationTiming;
    use gitguide_core::{AnimationComplexity, AnimationSpeed};
    use std::time::Instant;

    use crate::test_utils::TestTerminal;

    fn context(timing: AnimationTiming) -> ViewContext {
        ViewContext {
            theme: gitguide_core::ResolvedTheme::Dark,
            timing,
            now: Instant::now(),
        }
    }

    #[test]
    fn test_every_step_has_a_scene() {
        for kind in AnimationKind::ALL {
            assert_eq!(scenes(kind).len(), kind.step_count(), "{:?}", kind);
        }
    }

    #[test]
    fn test_scenes_fit_minimum_detail_pane() {
        for kind in AnimationKind::ALL {
            for scene in scenes(kind) {
                for line in scene {
                    assert!(text::width(line) <= 52, "{:?}: {}", kind, line);
                }
            }
        }
    }

    #[test]
    fn test_panel_shows_first_step() {
        let timing = AnimationTiming {
            speed: AnimationSpeed::Normal,
            ..Default::default()
        };
        let ctx = context(timing);
        let timeline = Timeline::new(AnimationKind::Commit, &timing, ctx.now);
        let theme = Theme::default();

        let mut term = TestTerminal::new();
        term.render_widget(
            AnimationPanel::new(&timeline, &ctx, &theme),
            Rect::new(0, 0, 80, PANEL_HEIGHT),
        );

        assert!(term.buffer_contains("Commit workflow"));
        assert!(term.buffer_contains("Step 1/4"));
        assert!(term.buffer_contains("AUTO"));
        assert!(term.buffer_contains("Edit files"));
    }

    #[test]
    fn test_reduced_motion_shows_final_step_and_badge() {
        let timing = AnimationTiming {
            reduced_motion: true,
            ..Default::default()
        };
        let ctx = context(timing);
        let timeline = Timeline::new(AnimationKind::Commit, &timing, ctx.now);
        let theme = Theme::default();

        let mut term = TestTerminal::new();
        term.render_widget(
            AnimationPanel::new(&timeline, &ctx, &theme),
            Rect::new(0, 0, 80, PANEL_HEIGHT),
        );

        assert!(term.buffer_contains("Step 4/4"));
        assert!(term.buffer_contains("REDUCED MOTION"));
    }

    #[test]
    fn test_simple_complexity_hides_callout() {
        let timing = AnimationTiming {
            complexity: AnimationComplexity::Simple,
            ..Default::default()
        };
        let ctx = context(timing);
        let timeline = Timeline::new(AnimationKind::Commit, &timing, ctx.now);
        let theme = Theme::default();

        let mut term = TestTerminal::new();
        term.render_widget(
            AnimationPanel::new(&timeline, &ctx, &theme),
            Rect::new(0, 0, 80, PANEL_HEIGHT),
        );

        assert!(!term.buffer_contains("Make changes to your project files"));
    }

    #[test]
    fn test_manual_badge_for_merge() {
        let timing = AnimationTiming::default();
        let ctx = context(timing);
        let timeline = Timeline::new(AnimationKind::Merge, &timing, ctx.now);
        let theme = Theme::default();

        let mut term = TestTerminal::new();
        term.render_widget(
            AnimationPanel::new(&timeline, &ctx, &theme),
            Rect::new(0, 0, 80, PANEL_HEIGHT),
        );

        assert!(term.buffer_contains("MANUAL"));
    }
}
