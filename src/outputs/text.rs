//! Plain-text rendering of grouped news.

use crate::models::GroupedNews;

/// One block per section, blank line between sections:
///
/// ```text
/// Политика (2)
///   - Лавров провел переговоры с главой МИД Турции
///     https://iz.ru/1567208/2023-09-03/lavrov-provel-peregovory
/// ```
pub fn render_grouped(news: &GroupedNews) -> String {
    news.iter()
        .map(|(section, records)| {
            let mut block = format!("{} ({})\n", section, records.len());
            for record in records {
                block.push_str(&format!("  - {}\n    {}\n", record.title, record.link));
            }
            block
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewsRecord;

    #[test]
    fn test_render_text() {
        let mut news = GroupedNews::new();
        news.push(
            "Politics",
            NewsRecord {
                title: "First".into(),
                link: "https://iz.ru/1".into(),
            },
        );
        news.push(
            "Sport",
            NewsRecord {
                title: "Second".into(),
                link: "https://iz.ru/2".into(),
            },
        );

        assert_eq!(
            render_grouped(&news),
            "Politics (1)\n  - First\n    https://iz.ru/1\n\nSport (1)\n  - Second\n    https://iz.ru/2\n"
        );
    }

    #[test]
    fn test_render_text_several_records_in_one_section() {
        let mut news = GroupedNews::new();
        for (title, link) in [("One", "https://iz.ru/1"), ("Two", "https://iz.ru/2")] {
            news.push(
                "Politics",
                NewsRecord {
                    title: title.into(),
                    link: link.into(),
                },
            );
        }

        assert_eq!(
            render_grouped(&news),
            "Politics (2)\n  - One\n    https://iz.ru/1\n  - Two\n    https://iz.ru/2\n"
        );
    }

    #[test]
    fn test_render_text_empty() {
        assert_eq!(render_grouped(&GroupedNews::new()), "");
    }
}
