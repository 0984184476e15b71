//! Terminal card rendering for ideas, investors, and analytics
//!
//! Draws bordered cards with Unicode box-drawing characters (or a plain
//! ASCII fallback) and optional ANSI colors via crossterm.

use crossterm::style::{Color, Stylize};
use unicode_width::UnicodeWidthStr;

use launchpulse::{Analytics, Idea, Investor, Snapshot};

/// Inner text width of a rendered card
const CARD_WIDTH: usize = 56;

/// Character set used for card borders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardStyle {
    /// Unicode box-drawing borders
    #[default]
    Unicode,
    /// Pure ASCII borders for maximum compatibility
    Ascii,
}

struct Border {
    top_left: char,
    top_right: char,
    bottom_left: char,
    bottom_right: char,
    horizontal: char,
    vertical: char,
}

impl CardStyle {
    fn border(&self) -> Border {
        match self {
            CardStyle::Unicode => Border {
                top_left: '┌',
                top_right: '┐',
                bottom_left: '└',
                bottom_right: '┘',
                horizontal: '─',
                vertical: '│',
            },
            CardStyle::Ascii => Border {
                top_left: '+',
                top_right: '+',
                bottom_left: '+',
                bottom_right: '+',
                horizontal: '-',
                vertical: '|',
            },
        }
    }

    fn marker_interested(&self) -> &'static str {
        match self {
            CardStyle::Unicode => "♥",
            CardStyle::Ascii => "<3",
        }
    }

    fn marker_trending(&self) -> &'static str {
        match self {
            CardStyle::Unicode => "▲ trending",
            CardStyle::Ascii => "^ trending",
        }
    }
}

/// Render one idea as a bordered card
pub fn idea_card(idea: &Idea, marked: bool, style: CardStyle) -> String {
    let mut lines = Vec::new();

    lines.push(format!("{}  [{}]", idea.name, idea.category));
    lines.push(String::new());
    lines.extend(wrap_text(&idea.description, CARD_WIDTH));
    lines.push(String::new());

    let mut status = format!("{} {} interests", style.marker_interested(), idea.interests);
    if idea.trending {
        status.push_str("   ");
        status.push_str(style.marker_trending());
    }
    if marked {
        status.push_str("   * you are interested");
    }
    lines.push(status);

    frame(&lines, style)
}

/// Render one investor as a bordered card
pub fn investor_card(investor: &Investor, style: CardStyle) -> String {
    let mut lines = Vec::new();

    lines.push(format!("({})  {}", investor.avatar, investor.name));
    lines.push(format!("{}, {}", investor.title, investor.company));
    lines.push(String::new());
    lines.push(format!("Location:  {}", investor.location));
    lines.push(format!("Invests:   {}", investor.investment_range));
    lines.push(format!("Focus:     {}", investor.focus.join(", ")));

    frame(&lines, style)
}

/// Render the analytics dashboard as a single card
pub fn analytics_card(analytics: &Analytics, style: CardStyle) -> String {
    let lines = vec![
        "Platform Analytics".to_string(),
        String::new(),
        format!("Total ideas:      {}", analytics.total_ideas),
        format!("Total interests:  {}", analytics.total_interests),
        format!("Trending now:     {}", analytics.trending_count),
        format!("Weekly growth:    +{}%", analytics.weekly_growth),
    ];

    frame(&lines, style)
}

/// Render every idea in a snapshot, newest first
pub fn idea_cards(snapshot: &Snapshot, style: CardStyle) -> String {
    snapshot
        .ideas()
        .iter()
        .map(|idea| idea_card(idea, snapshot.is_marked(idea.id), style))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Wrap borders and padding around content lines
fn frame(lines: &[String], style: CardStyle) -> String {
    let border = style.border();
    let rule: String = std::iter::repeat(border.horizontal)
        .take(CARD_WIDTH + 2)
        .collect();

    let mut out = String::new();
    out.push(border.top_left);
    out.push_str(&rule);
    out.push(border.top_right);
    out.push('\n');

    for line in lines {
        out.push(border.vertical);
        out.push(' ');
        out.push_str(&pad_to(line, CARD_WIDTH));
        out.push(' ');
        out.push(border.vertical);
        out.push('\n');
    }

    out.push(border.bottom_left);
    out.push_str(&rule);
    out.push(border.bottom_right);
    out.push('\n');
    out
}

/// Greedy word wrap using display width
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.width() + 1 + word.width() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Pad a line with spaces to the given display width
///
/// Lines wider than the target (an overlong unbroken word) are kept
/// as-is rather than truncated mid-glyph.
fn pad_to(line: &str, width: usize) -> String {
    let current = line.width();
    if current >= width {
        return line.to_string();
    }
    let mut padded = line.to_string();
    padded.push_str(&" ".repeat(width - current));
    padded
}

/// Apply ANSI colors to a rendered card
///
/// Borders become cyan, interest markers yellow, trending markers
/// magenta. Labels stay in the terminal's default color.
pub fn colorize(input: &str) -> String {
    let mut result = String::with_capacity(input.len() * 2);

    for c in input.chars() {
        match c {
            '┌' | '┐' | '└' | '┘' | '─' | '│' => {
                result.push_str(&format!("{}", c.to_string().with(Color::Cyan)));
            }
            '♥' => {
                result.push_str(&format!("{}", c.to_string().with(Color::Yellow)));
            }
            '▲' => {
                result.push_str(&format!("{}", c.to_string().with(Color::Magenta)));
            }
            _ => result.push(c),
        }
    }

    result
}
