use chrono::{DateTime, Utc};

use crate::analysis::repo_stats::percentage;
use crate::models::{FeaturedRepository, LanguageStat};

const DEFAULT_LANGUAGE_COLOR: &str = "#858585";

pub fn language_color(language: &str) -> &'static str {
    match language {
        "JavaScript" => "#f1e05a",
        "TypeScript" => "#3178c6",
        "Python" => "#3572A5",
        "Java" => "#b07219",
        "Go" => "#00ADD8",
        "Ruby" => "#701516",
        "PHP" => "#4F5D95",
        "C++" => "#f34b7d",
        "C" => "#555555",
        "C#" => "#178600",
        "Swift" => "#ffac45",
        "Kotlin" => "#A97BFF",
        "Rust" => "#dea584",
        "HTML" => "#e34c26",
        "CSS" => "#563d7c",
        "Vue" => "#41b883",
        "Shell" => "#89e051",
        "Dart" => "#00B4AB",
        "R" => "#198CE7",
        "Scala" => "#c22d40",
        _ => DEFAULT_LANGUAGE_COLOR,
    }
}

const INTERVALS: [(&str, i64); 6] = [
    ("year", 31_536_000),
    ("month", 2_592_000),
    ("week", 604_800),
    ("day", 86_400),
    ("hour", 3_600),
    ("minute", 60),
];

// Anything under a minute, including future timestamps, is "just now".
pub fn time_ago(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - date).num_seconds();

    for (name, length) in INTERVALS {
        let n = seconds / length;
        if n >= 1 {
            let plural = if n != 1 { "s" } else { "" };
            return format!("{} {}{} ago", n, name, plural);
        }
    }

    "just now".to_string()
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn language_bars_html(languages: &[LanguageStat], total_repos: u64) -> String {
    let Some(max_count) = languages.first().map(|l| l.count) else {
        return String::new();
    };

    let mut html = String::new();
    for lang in languages {
        let width = percentage(lang.count, max_count);
        let share = percentage(lang.count, total_repos);
        let name = escape_html(&lang.name);

        html.push_str(&format!(
            concat!(
                "<div class=\"language-bar\">",
                "<div class=\"language-info\">",
                "<span class=\"language-name\">{name}</span>",
                "<span class=\"language-count\">{count} repos ({share:.1}%)</span>",
                "</div>",
                "<div class=\"bar-container\">",
                "<div class=\"bar-fill\" style=\"width: {width:.1}%; background-color: {color}\"></div>",
                "</div>",
                "</div>\n"
            ),
            name = name,
            count = lang.count,
            share = share,
            width = width,
            color = language_color(&lang.name),
        ));
    }
    html
}

pub fn repo_card_html(repo: &FeaturedRepository, now: DateTime<Utc>) -> String {
    let stars = if repo.stars > 0 {
        format!("<span class=\"repo-stars\">⭐ {}</span>", repo.stars)
    } else {
        String::new()
    };

    let language = match repo.language.as_deref().filter(|l| !l.is_empty()) {
        Some(lang) => format!(
            "<span class=\"repo-language\"><span class=\"lang-dot\" style=\"background-color: {}\"></span>{}</span>",
            language_color(lang),
            escape_html(lang)
        ),
        None => String::new(),
    };

    let forks = if repo.forks > 0 {
        format!("<span class=\"repo-forks\">🔱 {}</span>", repo.forks)
    } else {
        String::new()
    };

    let description = repo
        .description
        .as_deref()
        .filter(|d| !d.is_empty())
        .map(escape_html)
        .unwrap_or_else(|| "No description available".to_string());

    format!(
        concat!(
            "<div class=\"repo-card\">",
            "<div class=\"repo-header\">",
            "<h4 class=\"repo-name\"><a href=\"{url}\" target=\"_blank\" rel=\"noopener\">{name}</a></h4>",
            "{stars}",
            "</div>",
            "<p class=\"repo-description\">{description}</p>",
            "<div class=\"repo-footer\">",
            "{language}{forks}",
            "<span class=\"repo-updated\">Updated {updated}</span>",
            "</div>",
            "</div>\n"
        ),
        url = escape_html(&repo.url),
        name = escape_html(&repo.name),
        stars = stars,
        description = description,
        language = language,
        forks = forks,
        updated = time_ago(repo.updated, now),
    )
}

pub fn repo_grid_html(repos: &[FeaturedRepository], now: DateTime<Utc>) -> String {
    repos.iter().map(|r| repo_card_html(r, now)).collect()
}
