use ratatui::layout::Rect;
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::App;
use crate::ui::layout::home_layout;
use crate::ui::theme::Palette;
use crate::ui::widgets::project_list::block_lines;
use crate::ui::widgets::stats::render_stats_list;

pub fn render_home(app: &App, palette: &Palette, f: &mut Frame<'_>, body: Rect) {
    let layout = home_layout(body);

    let intro = Paragraph::new(vec![
        Line::styled(format!("{}'s portfolio", app.config.github_user), palette.title()),
        Line::styled(
            "Projects, GitHub activity and the history of this site.",
            palette.muted(),
        ),
    ])
    .block(Block::default().borders(Borders::NONE));
    f.render_widget(intro, layout.intro);

    let featured = app.home_blocks();
    let lines: Vec<Line<'_>> = if featured.is_empty() {
        vec![Line::styled("No projects to show", palette.muted())]
    } else {
        featured
            .iter()
            .flat_map(|block| block_lines(block, palette))
            .collect()
    };
    let latest = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .title("Latest Projects")
                .title_style(palette.title())
                .borders(Borders::ALL)
                .border_style(palette.border(false)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(latest, layout.featured);

    let (entries, placeholder) = match &app.github {
        Some(stats) => (stats.entries(), ""),
        None if app.config.offline => (Vec::new(), "Offline"),
        None => (Vec::new(), "GitHub stats unavailable"),
    };
    render_stats_list("My GitHub Stats", &entries, placeholder, palette, f, layout.github);
}
