use crate::model::{Rocket, RocketStage};
use crate::ui::app::{App, Screen};
use crate::ui::footer::{Footer, DETAIL_HINTS, LAUNCH_HINTS, LIST_HINTS};
use crate::ui::geometry::{measure, Bounds, CoordinateSpace, Measurements};
use crate::ui::header::Header;
use crate::ui::layout::{column_rect, layout_regions};
use crate::ui::navigation::FrameId;
use crate::ui::rocket_detail::RocketDetailState;
use crate::ui::rocket_launch::{rocket_center_y, RocketImage, RocketLaunchState};
use crate::ui::rocket_list::{LoadStatus, RocketListState};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, FLAME, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR,
};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;
use std::time::Instant;

/// Key the launch canvas is measured under.
pub const CANVAS: &str = "canvas";

const ROCKET_BODY: [&str; 6] = ["  /\\  ", " /  \\ ", " |  | ", " |[]| ", " |  | ", "/_||_\\"];
const ROCKET_FLAME: [&str; 2] = ["  ||  ", "  ''  "];

/// Draw one frame. Returns what was measured while drawing.
pub fn draw(frame: &mut Frame<'_>, app: &App, now: Instant) -> Measurements {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let state = app.state();
    let mut measured = Measurements::new();

    let (title, hints) = match app.screen() {
        Screen::List => ("Rockets".to_string(), LIST_HINTS),
        Screen::Detail(_, detail) => (detail.rocket.rocket_name.clone(), DETAIL_HINTS),
        Screen::Launch(_, _) => ("Launch".to_string(), LAUNCH_HINTS),
    };
    frame.render_widget(
        Header::new().widget(&title, state.status(), state.rockets.len()),
        header,
    );
    frame.render_widget(Clear, body);
    match app.screen() {
        Screen::List => draw_list(frame, state, app.selected(), body),
        Screen::Detail(_, detail) => draw_detail(frame, detail, body),
        Screen::Launch(id, launch) => {
            measured.merge(draw_launch(frame, app, id, launch, body, now));
        }
    }
    frame.render_widget(Footer::new().widget(footer, hints), footer);

    measured
}

fn section(title: &str) -> Block<'static> {
    Block::default()
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(ACCENT),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}

fn draw_list(frame: &mut Frame<'_>, state: &RocketListState, selected: usize, area: Rect) {
    let block = section("Rockets");
    let text_style = Style::default().fg(HEADER_TEXT);

    match state.status() {
        LoadStatus::Loading => {
            frame.render_widget(Paragraph::new("Loading rockets...").block(block), area);
        }
        LoadStatus::Failed => {
            let message = state
                .error
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default();
            let lines = vec![
                Line::from(Span::styled(message, Style::default().fg(STATUS_ERROR))),
                Line::from(""),
                Line::from(Span::styled("Press r to retry.", text_style)),
            ];
            frame.render_widget(
                Paragraph::new(lines).wrap(Wrap { trim: true }).block(block),
                area,
            );
        }
        LoadStatus::Idle => {
            frame.render_widget(
                Paragraph::new("No rockets. Press r to load.").block(block),
                area,
            );
        }
        LoadStatus::Loaded => {
            let dim = Style::default().fg(HEADER_SEPARATOR);
            let items: Vec<ListItem> = state
                .rockets
                .iter()
                .map(|rocket| {
                    ListItem::new(Line::from(vec![
                        Span::styled(format!("{:<16}", rocket.rocket_name), text_style),
                        Span::styled(format!("first flight {}", rocket.first_flight), dim),
                        Span::styled(
                            if rocket.active { "  active" } else { "  retired" },
                            dim,
                        ),
                    ]))
                })
                .collect();
            let list = List::new(items)
                .block(block)
                .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT))
                .highlight_symbol("› ");
            let mut list_state = ListState::default();
            list_state.select(Some(selected));
            frame.render_stateful_widget(list, area, &mut list_state);
        }
    }
}

fn draw_detail(frame: &mut Frame<'_>, detail: &RocketDetailState, area: Rect) {
    let rocket = &detail.rocket;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(4),
            Constraint::Min(0),
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(rocket.description.clone())
            .wrap(Wrap { trim: true })
            .block(section(&rocket.rocket_name)),
        rows[0],
    );

    let tiles = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(rows[1]);
    for ((label, value), tile) in detail.parameters().into_iter().zip(tiles.iter()) {
        let value = Line::from(Span::styled(
            value,
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(Paragraph::new(value).block(section(label)), *tile);
    }

    frame.render_widget(
        Paragraph::new(detail_lines(rocket)).block(section("Overview")),
        rows[2],
    );
}

fn detail_lines(rocket: &Rocket) -> Vec<Line<'static>> {
    let label = Style::default().fg(HEADER_SEPARATOR);
    let text = Style::default().fg(HEADER_TEXT);
    let row = |name: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:<18}", name), label),
            Span::styled(value, text),
        ])
    };

    vec![
        row("First flight", rocket.first_flight.clone()),
        row("Country", rocket.country.clone()),
        row(
            "Cost per launch",
            format!("${:.0}M", rocket.cost_per_launch / 1_000_000.0),
        ),
        row("Success rate", format!("{:.0}%", rocket.success_rate_pct)),
        row("First stage", stage_summary(&rocket.first_stage)),
        row("Second stage", stage_summary(&rocket.second_stage)),
        row(
            "Engines",
            format!(
                "{} x {} {}",
                rocket.engines.number, rocket.engines.engine_type, rocket.engines.version
            ),
        ),
    ]
}

fn stage_summary(stage: &dyn RocketStage) -> String {
    format!(
        "{} · {} · {} · {}",
        stage.formatted_reusability(),
        stage.formatted_engines(),
        stage.formatted_fuel_amount(),
        stage.formatted_burn_time()
    )
}

fn draw_launch(
    frame: &mut Frame<'_>,
    app: &App,
    id: FrameId,
    launch: &RocketLaunchState,
    area: Rect,
    now: Instant,
) -> Measurements {
    let block = section("Launch");
    let canvas_area = block.inner(area);
    frame.render_widget(block, area);

    let measured = measure(CANVAS, canvas_area, CoordinateSpace::Local(Bounds::from(area)));
    let canvas = canvas_bounds(&measured, app.measurements());

    let offset = app.animation().offset(now);
    let flying = launch.image == RocketImage::Flying || offset > 0.0;
    let mut art: Vec<Line> = ROCKET_BODY
        .iter()
        .map(|row| Line::from(Span::styled(*row, Style::default().fg(HEADER_TEXT))))
        .collect();
    if flying {
        art.extend(
            ROCKET_FLAME
                .iter()
                .map(|row| Line::from(Span::styled(*row, Style::default().fg(FLAME)))),
        );
    }

    let rocket_height = art.len() as f32;
    let center = rocket_center_y(canvas, rocket_height, offset);
    let top = (center - rocket_height / 2.0).round() as i32;
    if let Some(rect) = column_rect(canvas_area, ROCKET_BODY[0].len() as u16, art.len() as u16, top)
    {
        // Rows cut off at the canvas top are the leading ones.
        let skipped = (-top).max(0);
        frame.render_widget(Paragraph::new(art).scroll((skipped as u16, 0)), rect);
    }

    let motion = if app.motion_active(id) { "on" } else { "off" };
    let mut status = vec![
        Span::styled(" motion ", Style::default().fg(HEADER_SEPARATOR)),
        Span::styled(motion, Style::default().fg(HEADER_TEXT)),
    ];
    if let Some(manual) = app.manual() {
        status.push(Span::styled("  pitch ", Style::default().fg(HEADER_SEPARATOR)));
        status.push(Span::styled(
            format!("{:+.2} rad", manual.pitch()),
            Style::default().fg(HEADER_TEXT),
        ));
    }
    if canvas_area.height > 0 {
        let status_area = Rect {
            height: 1,
            ..canvas_area
        };
        frame.render_widget(Paragraph::new(Line::from(status)), status_area);
    }

    measured
}

/// Canvas geometry for this frame: what was just measured, else the last known.
fn canvas_bounds(measured: &Measurements, recorded: &Measurements) -> Bounds {
    measured
        .get(CANVAS)
        .or_else(|| recorded.get(CANVAS))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixture_rockets;

    fn text(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn detail_lines_use_stage_formatting() {
        let rocket = fixture_rockets().remove(1);
        let lines = text(&detail_lines(&rocket));
        assert!(lines[0].ends_with("2010-06-04"));
        assert!(lines[4].contains("9 engines"));
        assert!(lines[5].contains("Not reusable"));
    }

    #[test]
    fn rocket_art_is_rectangular() {
        let width = ROCKET_BODY[0].len();
        assert!(ROCKET_BODY.iter().chain(ROCKET_FLAME.iter()).all(|row| row.len() == width));
    }

    #[test]
    fn fresh_canvas_measurement_wins_over_recorded() {
        let space = CoordinateSpace::Local(Bounds::from(Rect::new(0, 0, 80, 24)));
        let recorded = measure(CANVAS, Rect::new(1, 1, 78, 22), space);
        let resized = measure(CANVAS, Rect::new(1, 1, 38, 10), space);

        assert_eq!(canvas_bounds(&resized, &recorded).width, 38.0);
        assert_eq!(
            canvas_bounds(&resized, &recorded),
            resized.get(CANVAS).unwrap_or_default()
        );
        assert_eq!(
            canvas_bounds(&Measurements::new(), &recorded),
            recorded.get(CANVAS).unwrap_or_default()
        );
        assert_eq!(canvas_bounds(&Measurements::new(), &Measurements::new()), Bounds::default());
    }
}
