//! # Rendering Module
//!
//! Turns command results into terminal text through the minijinja templates
//! in `templates.rs`. A `style` filter registered on every environment maps
//! semantic style names to `console` styles from [`AGROCAT_THEME`].
//!
//! Layout calculations (column widths, truncation, padding) stay in Rust
//! because they need Unicode-aware width handling. Templates only decide what
//! is printed and with which style.

use chrono::NaiveDate;
use minijinja::{Environment, Value};
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use agrocat::commands::{CatalogFacets, CmdMessage, ListingPage, MessageLevel, Record};
use agrocat::config::AgrocatConfig;
use agrocat::model::{Course, NewsItem, Product, Program, ViewMode};

use super::styles::{names, AGROCAT_THEME};
use super::templates::{
    CONFIG_TEMPLATE, FACETS_TEMPLATE, ITEM_TEMPLATE, LISTING_TEMPLATE, MESSAGES_TEMPLATE,
};

pub const LINE_WIDTH: usize = 100;
const CURRENCY: &str = "FCFA";
const SEPARATOR: &str = " · ";

/// Renders `template` with the `style` filter bound to the theme.
pub fn render_template<T: Serialize>(
    template: &'static str,
    data: &T,
    use_color: bool,
) -> Result<String, minijinja::Error> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);

    let theme = AGROCAT_THEME.clone();
    env.add_filter("style", move |value: Value, name: String| -> String {
        let text = value.to_string();
        if use_color {
            theme.apply(&name, &text)
        } else {
            theme.apply_plain(&name, &text)
        }
    });

    env.add_template("_inline", template)?;
    let tmpl = env.get_template("_inline")?;
    tmpl.render(data)
}

/// Display pieces of one record, before layout.
struct Card {
    id: String,
    title: String,
    meta: String,
    price: String,
    price_style: &'static str,
    figure: String,
    badges: Vec<&'static str>,
    description: String,
    fields: Vec<(&'static str, String, &'static str)>,
}

#[derive(Serialize)]
struct Row {
    id: String,
    title: String,
    meta: String,
    price: String,
    price_style: &'static str,
    figure: String,
    badges: String,
}

#[derive(Serialize)]
struct ListingData {
    title: String,
    summary: String,
    search_line: Option<String>,
    is_empty: bool,
    empty_title: String,
    empty_hint: String,
    grid: bool,
    rows: Vec<Row>,
    footer: Option<String>,
}

#[derive(Serialize)]
struct FieldLine {
    label: String,
    value: String,
    style: &'static str,
}

#[derive(Serialize)]
struct ItemData {
    title: String,
    id: String,
    subtitle: String,
    fields: Vec<FieldLine>,
    description: String,
}

#[derive(Serialize)]
struct OptionLine {
    value: String,
    count: String,
}

#[derive(Serialize)]
struct FacetLine {
    key: String,
    syntax: String,
    label: String,
    options: Vec<OptionLine>,
}

#[derive(Serialize)]
struct FacetsData {
    title: String,
    summary: String,
    filters: Vec<FacetLine>,
    sorts: String,
}

#[derive(Serialize)]
struct EntryLine {
    key: String,
    value: String,
}

#[derive(Serialize)]
struct ConfigData {
    entries: Vec<EntryLine>,
    location: String,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: String,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

/// Renders one page of a listing, or the no-results block.
pub fn render_listing(page: &ListingPage, today: NaiveDate, use_color: bool) -> String {
    let cards: Vec<Card> = page.items.iter().map(|r| card(r, today)).collect();
    let grid = page.view == ViewMode::Grid;
    let rows = if grid {
        grid_rows(cards)
    } else {
        list_rows(cards)
    };

    let data = ListingData {
        title: page.kind.to_string(),
        summary: summary(page),
        search_line: (!page.search.trim().is_empty())
            .then(|| format!("search: \"{}\"", page.search.trim())),
        is_empty: page.is_empty,
        empty_title: format!("No {} match the current filters.", page.kind),
        empty_hint: format!(
            "{} {} in the catalog. Clear all filters: {}",
            page.catalog_size,
            page.kind,
            clear_all_command(page)
        ),
        grid,
        rows,
        footer: footer(page),
    };

    render_template(LISTING_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

fn summary(page: &ListingPage) -> String {
    let mut parts = vec![format!("{} of {}", page.total_filtered, page.catalog_size)];
    if !page.is_empty {
        parts.push(format!("page {}/{}", page.page, page.total_pages));
    }
    parts.push(format!("sorted by {}", page.sort));
    parts.push(format!("{} view", page.view));
    match page.active_filter_count {
        0 => {}
        1 => parts.push("1 active filter".to_string()),
        n => parts.push(format!("{} active filters", n)),
    }
    parts.join(SEPARATOR)
}

/// The `list` invocation that drops filters and search but keeps the order
/// and layout, like `Action::ClearAll`.
fn clear_all_command(page: &ListingPage) -> String {
    let mut command = format!("agrocat list {}", page.kind);
    if page.sort != page.default_sort {
        command.push_str(&format!(" --sort {}", page.sort));
    }
    if page.view != page.default_view {
        command.push_str(&format!(" --view {}", page.view));
    }
    command
}

fn footer(page: &ListingPage) -> Option<String> {
    if page.total_pages <= 1 {
        return None;
    }
    let mut parts = vec![format!("page {} of {}", page.page, page.total_pages)];
    if page.has_previous {
        parts.push(format!("prev: --page {}", page.page - 1));
    }
    if page.has_next {
        parts.push(format!("next: --page {}", page.page + 1));
    }
    Some(parts.join(SEPARATOR))
}

fn grid_rows(cards: Vec<Card>) -> Vec<Row> {
    let id_width = cards.iter().map(|c| c.id.width()).max().unwrap_or(0);
    let title_width = LINE_WIDTH.saturating_sub(id_width + 1);

    cards
        .into_iter()
        .map(|c| Row {
            id: pad_right(&c.id, id_width),
            title: truncate_to_width(&c.title, title_width),
            meta: truncate_to_width(&c.meta, LINE_WIDTH.saturating_sub(4)),
            price: c.price,
            price_style: c.price_style,
            figure: c.figure,
            badges: c.badges.join(", "),
        })
        .collect()
}

fn list_rows(cards: Vec<Card>) -> Vec<Row> {
    let id_width = cards.iter().map(|c| c.id.width()).max().unwrap_or(0);
    let price_width = cards.iter().map(|c| c.price.width()).max().unwrap_or(0);
    let figure_width = cards.iter().map(|c| c.figure.width()).max().unwrap_or(0);
    let title_width =
        LINE_WIDTH.saturating_sub(id_width + 1 + 1 + price_width + 2 + figure_width);

    cards
        .into_iter()
        .map(|c| Row {
            id: pad_right(&c.id, id_width),
            title: pad_right(&truncate_to_width(&c.title, title_width), title_width),
            meta: c.meta,
            price: pad_left(&c.price, price_width),
            price_style: c.price_style,
            figure: c.figure,
            badges: c.badges.join(", "),
        })
        .collect()
}

/// Renders the detail view of one record.
pub fn render_item(record: &Record, today: NaiveDate, use_color: bool) -> String {
    let c = card(record, today);
    let label_width = c.fields.iter().map(|(l, _, _)| l.width()).max().unwrap_or(0);

    let data = ItemData {
        title: c.title,
        id: c.id,
        subtitle: c.meta,
        fields: c
            .fields
            .into_iter()
            .map(|(label, value, style)| FieldLine {
                label: pad_right(label, label_width),
                value,
                style,
            })
            .collect(),
        description: c.description,
    };

    render_template(ITEM_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Renders the filter keys, option counts and sorts of a catalog.
pub fn render_facets(facets: &CatalogFacets, use_color: bool) -> String {
    let key_width = facets.filters.iter().map(|f| f.key.width()).max().unwrap_or(0);

    let filters = facets
        .filters
        .iter()
        .map(|f| {
            let option_width = f.options.iter().map(|o| o.value.width()).max().unwrap_or(0);
            FacetLine {
                key: pad_right(f.key, key_width),
                syntax: f.syntax.to_string(),
                label: f.label.to_string(),
                options: f
                    .options
                    .iter()
                    .map(|o| OptionLine {
                        value: pad_right(o.value, option_width),
                        count: format!("({})", o.count),
                    })
                    .collect(),
            }
        })
        .collect();

    let sorts: Vec<String> = facets.sorts.iter().map(|s| s.to_string()).collect();
    let data = FacetsData {
        title: facets.kind.to_string(),
        summary: format!(
            "{} items{}default sort {}",
            facets.catalog_size, SEPARATOR, facets.default_sort
        ),
        filters,
        sorts: sorts.join(", "),
    };

    render_template(FACETS_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Renders every config key with its current value.
pub fn render_config(config: &AgrocatConfig, location: &str, use_color: bool) -> String {
    let keys = AgrocatConfig::keys();
    let key_width = keys.iter().map(|k| k.width()).max().unwrap_or(0);
    let entries = keys
        .iter()
        .map(|key| EntryLine {
            key: pad_right(key, key_width),
            value: config.get(key).unwrap_or_default(),
        })
        .collect();

    let data = ConfigData {
        entries,
        location: location.to_string(),
    };
    render_template(CONFIG_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Renders command messages with their level's style.
pub fn render_messages(messages: &[CmdMessage], use_color: bool) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let data = MessagesData {
        messages: messages
            .iter()
            .map(|msg| MessageData {
                content: msg.content.clone(),
                style: level_style(&msg.level).to_string(),
            })
            .collect(),
    };

    render_template(MESSAGES_TEMPLATE, &data, use_color).unwrap_or_else(|_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

fn level_style(level: &MessageLevel) -> &'static str {
    match level {
        MessageLevel::Info => names::INFO,
        MessageLevel::Success => names::SUCCESS,
        MessageLevel::Warning => names::WARNING,
        MessageLevel::Error => names::ERROR,
    }
}

fn card(record: &Record, today: NaiveDate) -> Card {
    match record {
        Record::Program(p) => program_card(p, today),
        Record::Course(c) => course_card(c, today),
        Record::Product(p) => product_card(p, today),
        Record::News(n) => news_card(n, today),
    }
}

fn program_card(p: &Program, today: NaiveDate) -> Card {
    let (price, price_style) = format_price(p.price);
    let mut badges = Vec::new();
    if p.certified {
        badges.push("certified");
    }
    let weeks = format!("{} weeks", p.duration_weeks);
    Card {
        id: p.id.clone(),
        title: p.title.clone(),
        meta: [
            p.category.as_str(),
            p.level.as_str(),
            weeks.as_str(),
            p.location.as_str(),
        ]
        .join(SEPARATOR),
        price: price.clone(),
        price_style,
        figure: format_rating(p.rating),
        badges,
        description: p.description.clone(),
        fields: vec![
            ("category", p.category.clone(), names::INFO),
            ("level", p.level.clone(), names::INFO),
            ("duration", weeks, names::INFO),
            ("location", p.location.clone(), names::INFO),
            ("price", price, price_style),
            ("rating", format_rating(p.rating), names::RATING),
            ("enrolled", p.enrolled.to_string(), names::INFO),
            ("starts", format_date(p.start_date, today), names::INFO),
            ("certified", yes_no(p.certified), names::INFO),
            ("tags", p.tags.join(", "), names::BADGE),
        ],
    }
}

fn course_card(c: &Course, today: NaiveDate) -> Card {
    let (price, price_style) = format_price(c.price);
    let mut badges = Vec::new();
    if c.has_certificate {
        badges.push("certificate");
    }
    let hours = format_hours(c.duration_hours);
    Card {
        id: c.id.clone(),
        title: c.title.clone(),
        meta: [
            c.category.as_str(),
            c.level.as_str(),
            hours.as_str(),
            c.instructor.as_str(),
        ]
        .join(SEPARATOR),
        price: price.clone(),
        price_style,
        figure: format_rating(c.rating),
        badges,
        description: c.description.clone(),
        fields: vec![
            ("category", c.category.clone(), names::INFO),
            ("level", c.level.clone(), names::INFO),
            ("duration", hours, names::INFO),
            ("instructor", c.instructor.clone(), names::INFO),
            ("price", price, price_style),
            ("rating", format_rating(c.rating), names::RATING),
            ("students", c.enrolled_students.to_string(), names::INFO),
            ("published", format_date(c.published_at, today), names::INFO),
            ("certificate", yes_no(c.has_certificate), names::INFO),
            ("tags", c.tags.join(", "), names::BADGE),
        ],
    }
}

fn product_card(p: &Product, today: NaiveDate) -> Card {
    let (price, price_style) = format_price(p.price);
    let price = if p.price > 0.0 {
        format!("{}/{}", price, p.unit)
    } else {
        price
    };
    let mut badges = Vec::new();
    if p.organic {
        badges.push("organic");
    }
    if !p.in_stock {
        badges.push("out of stock");
    }
    Card {
        id: p.id.clone(),
        title: p.name.clone(),
        meta: [p.category.as_str(), p.producer.as_str(), p.location.as_str()].join(SEPARATOR),
        price: price.clone(),
        price_style,
        figure: format_rating(p.rating),
        badges,
        description: p.description.clone(),
        fields: vec![
            ("category", p.category.clone(), names::INFO),
            ("producer", p.producer.clone(), names::INFO),
            ("location", p.location.clone(), names::INFO),
            ("price", price, price_style),
            ("rating", format_rating(p.rating), names::RATING),
            ("sales", p.sales.to_string(), names::INFO),
            ("listed", format_date(p.listed_at, today), names::INFO),
            ("in stock", yes_no(p.in_stock), names::INFO),
            ("organic", yes_no(p.organic), names::INFO),
            ("tags", p.tags.join(", "), names::BADGE),
        ],
    }
}

fn news_card(n: &NewsItem, today: NaiveDate) -> Card {
    let mut badges = Vec::new();
    if n.featured {
        badges.push("featured");
    }
    let published = format_date(n.published_at, today);
    Card {
        id: n.id.clone(),
        title: n.title.clone(),
        meta: [n.category.as_str(), n.author.as_str(), published.as_str()].join(SEPARATOR),
        price: format!("{} views", n.views),
        price_style: names::MUTED,
        figure: String::new(),
        badges,
        description: n.excerpt.clone(),
        fields: vec![
            ("category", n.category.clone(), names::INFO),
            ("author", n.author.clone(), names::INFO),
            ("published", published, names::INFO),
            ("views", n.views.to_string(), names::INFO),
            ("featured", yes_no(n.featured), names::INFO),
            ("tags", n.tags.join(", "), names::BADGE),
        ],
    }
}

fn format_price(price: f64) -> (String, &'static str) {
    if price == 0.0 {
        return ("free".to_string(), names::FREE);
    }
    let amount = if price.fract() == 0.0 {
        group_thousands(price as u64)
    } else {
        format!("{:.2}", price)
    };
    (format!("{} {}", amount, CURRENCY), names::PRICE)
}

/// `25000` -> `25 000`.
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

fn format_rating(rating: f64) -> String {
    format!("★ {:.1}", rating)
}

fn format_hours(hours: f64) -> String {
    if hours.fract() == 0.0 {
        format!("{:.0}h", hours)
    } else {
        format!("{:.1}h", hours)
    }
}

fn yes_no(flag: bool) -> String {
    let answer = if flag { "yes" } else { "no" };
    answer.to_string()
}

/// Past dates as relative time, future dates as the date itself.
fn format_date(date: NaiveDate, today: NaiveDate) -> String {
    if date > today {
        return format!("on {}", date);
    }
    if date == today {
        return "today".to_string();
    }
    let elapsed = (today - date).to_std().unwrap_or_default();
    timeago::Formatter::new().convert(elapsed)
}

fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(pad))
}

fn pad_left(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(s.width());
    format!("{}{}", " ".repeat(pad), s)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
