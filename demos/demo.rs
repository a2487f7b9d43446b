//! Interactive demo: press keys to present entries, drag them with the
//! mouse, flick to dismiss.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{
	self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind,
};
use crossterm::execute;
use ratatui::style::{Color, Stylize};
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, Paragraph};

use ratatui_overlays::{
	Animation, Attributes, DisplayDuration, DisplayManner, Entry, Presenter, Priority,
	PullbackAnimation, QueuePolicy, SafeAreaInsets, ScrollBehavior,
};

const TICK: Duration = Duration::from_millis(16);

fn main() -> io::Result<()> {
	let mut terminal = ratatui::init();
	execute!(io::stdout(), EnableMouseCapture)?;
	let result = run(&mut terminal);
	execute!(io::stdout(), DisableMouseCapture)?;
	ratatui::restore();
	result
}

fn run(terminal: &mut ratatui::DefaultTerminal) -> io::Result<()> {
	let mut presenter = Presenter::new();
	presenter.set_queue_policy(QueuePolicy::Priority);
	presenter.set_safe_area(SafeAreaInsets::new(1, 1));
	let mut shown = 0u32;
	let mut last_tick = Instant::now();

	loop {
		terminal.draw(|frame| {
			let host = Paragraph::new(Text::from(vec![
				Line::from("ratatui-overlays demo").bold(),
				Line::from(""),
				Line::from("1  top banner (override)"),
				Line::from("2  bottom toast (enqueued, drag me)"),
				Line::from("3  center alert (infinite, tap backdrop)"),
				Line::from("t  transform the mounted entry"),
				Line::from("d  dismiss"),
				Line::from("q  quit"),
			]))
			.block(Block::bordered().title("host application"));
			frame.render_widget(host, frame.area());
			presenter.render(frame.area(), frame.buffer_mut());
		})?;

		let timeout = TICK.saturating_sub(last_tick.elapsed());
		if event::poll(timeout)? {
			match event::read()? {
				Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
					KeyCode::Char('q') => return Ok(()),
					KeyCode::Char('1') => {
						shown += 1;
						presenter.display(banner(shown));
					}
					KeyCode::Char('2') => {
						shown += 1;
						presenter.display(toast(shown));
					}
					KeyCode::Char('3') => {
						shown += 1;
						presenter.display(alert(shown));
					}
					KeyCode::Char('t') => {
						presenter.transform(Text::from("transformed!").fg(Color::Yellow));
					}
					KeyCode::Char('d') => presenter.dismiss(),
					_ => {}
				},
				Event::Mouse(mouse) => {
					presenter.handle_mouse(mouse);
				}
				_ => {}
			}
		}
		if last_tick.elapsed() >= TICK {
			presenter.tick(last_tick.elapsed());
			last_tick = Instant::now();
		}
	}
}

fn banner(n: u32) -> Entry {
	let text = Text::from(format!(" banner #{n} — overrides whatever is showing "))
		.fg(Color::Rgb(230, 230, 230))
		.bg(Color::Rgb(40, 90, 160));
	Entry::text(text, Attributes::top_banner()).named("banner")
}

fn toast(n: u32) -> Entry {
	let attributes = Attributes {
		scroll_behavior: ScrollBehavior::Enabled {
			swipeable: true,
			pullback: PullbackAnimation::jolt(),
		},
		display_manner: DisplayManner::Enqueue(Priority::NORMAL),
		entrance_animation: Animation::translation(),
		exit_animation: Animation::translation(),
		..Attributes::bottom_toast()
	};
	let text = Text::from(format!(" toast #{n} — flick me off the bottom edge "))
		.fg(Color::Rgb(20, 20, 20))
		.bg(Color::Rgb(200, 180, 90));
	Entry::text(text, attributes).named("toast")
}

fn alert(n: u32) -> Entry {
	let attributes = Attributes {
		display_duration: DisplayDuration::Infinite,
		..Attributes::center_alert()
	};
	let text = Text::from(vec![
		Line::from(format!(" alert #{n} ")).bold(),
		Line::from(" tap the dimmed backdrop to close "),
	])
	.fg(Color::Rgb(230, 230, 230))
	.bg(Color::Rgb(140, 40, 40));
	Entry::text(text, attributes).named("alert")
}
