//! Main render/view function (View in TEA pattern)

use gitguide_app::{AppState, UiMode, ViewContext};
use gitguide_core::{GuideTab, FAQ};
use ratatui::{style::Style, widgets::Block, Frame};

use crate::layout;
use crate::theme::Theme;
use crate::widgets::{self, modal_overlay};


/// Theme for the current frame, honouring `NO_COLOR` and dumb terminals
pub fn frame_theme(state: &AppState, ctx: &ViewContext) -> Theme {
    let env = &state.environment;
    Theme::from_context(ctx, env.no_color, env.dumb_terminal)
}

/// Render the complete UI (View function in TEA)
///
/// Pure with respect to `state`: every timer-dependent value is read
/// through one `ViewContext` snapshot.
pub fn view(frame: &mut Frame, state: &AppState) {
    let ctx = state.view_context();
    let theme = frame_theme(state, &ctx);
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(theme.palette.background)),
        area,
    );

    let areas = layout::create(area, state.notice.visible());

    frame.render_widget(
        widgets::MainHeader::new(
            state.progress.percentage(),
            state.theme_mode,
            ctx.theme,
            &theme,
        ),
        areas.header,
    );
    frame.render_widget(widgets::GuideTabs::new(state.guide.tab, &theme), areas.tabs);

    if let Some(notice_area) = areas.notice {
        frame.render_widget(widgets::NoticeBanner::new(&state.notice, &theme), notice_area);
    }

    render_content(frame, state, &ctx, &theme, areas.content);

    frame.render_widget(widgets::StatusBar::new(state, &theme), areas.status);

    // Overlays
    match state.ui_mode {
        UiMode::Normal => {}
        UiMode::Search => {
            modal_overlay::dim_background(frame.buffer_mut(), area, &theme.palette);
            frame.render_widget(widgets::SearchOverlay::new(&state.search, ctx.now, &theme), area);
        }
        UiMode::Settings => {
            modal_overlay::dim_background(frame.buffer_mut(), area, &theme.palette);
            frame.render_widget(widgets::SettingsPanel::new(state, &theme), area);
        }
        UiMode::Progress => {
            modal_overlay::dim_background(frame.buffer_mut(), area, &theme.palette);
            frame.render_widget(
                widgets::ProgressPanel::new(&state.progress, state.progress_cursor, &theme),
                area,
            );
        }
        UiMode::ConfirmDialog => {
            modal_overlay::dim_background(frame.buffer_mut(), area, &theme.palette);
            frame.render_widget(
                widgets::ProgressPanel::new(&state.progress, state.progress_cursor, &theme),
                area,
            );
            if let Some(dialog) = &state.confirm_dialog {
                frame.render_widget(widgets::ConfirmDialog::new(dialog, &theme), area);
            }
        }
    }
}

/// Active tab body, with the focused animation docked underneath
fn render_content(
    frame: &mut Frame,
    state: &AppState,
    ctx: &ViewContext,
    theme: &Theme,
    area: ratatui::layout::Rect,
) {
    let guide = &state.guide;

    let (body, panel) = match &guide.timeline {
        Some(_) if area.height >= widgets::PANEL_HEIGHT + 6 => {
            let (body, panel) = layout::split_animation(area, widgets::PANEL_HEIGHT);
            (body, Some(panel))
        }
        _ => (area, None),
    };

    match guide.tab {
        GuideTab::Introduction => {
            frame.render_widget(widgets::IntroPage::new(guide.scroll, theme), body);
        }
        GuideTab::Faq => {
            frame.render_widget(
                widgets::FaqList::new(FAQ, guide.faq_cursor, guide.faq_open, theme),
                body,
            );
        }
        GuideTab::AdvancedViz => {
            frame.render_widget(widgets::VizPage::new(&state.diagram, guide.scroll, theme), body);
        }
        GuideTab::Basic | GuideTab::Branching | GuideTab::Remote | GuideTab::Advanced => {
            let (list_area, detail_area) = layout::split_cards(body);
            frame.render_widget(widgets::CardList::new(guide.cards(), guide.card, theme), list_area);
            if let Some(card) = guide.focused_card() {
                frame.render_widget(
                    widgets::CardDetail::new(card, guide.examples_open, guide.scroll, theme),
                    detail_area,
                );
            }
        }
    }

    if let (Some(timeline), Some(panel)) = (&guide.timeline, panel) {
        frame.render_widget(widgets::AnimationPanel::new(timeline, ctx, theme), panel);
    }
}
