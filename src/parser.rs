use scraper::Html;

use crate::models::CharacteristicMap;
use crate::selectors;

/// Collects the detail-page URLs referenced by the listing markup, in
/// document order. Duplicate links are kept as-is; relative hrefs are
/// joined onto `base_url`.
pub fn extract_links(listing_html: &str, base_url: &str) -> Vec<String> {
    let doc = Html::parse_document(listing_html);
    let mut links = Vec::new();

    for a_tag in doc.select(&selectors::DETAIL_LINK) {
        let Some(href) = a_tag.value().attr("href") else {
            continue;
        };
        if href.starts_with("http") {
            links.push(href.to_string());
        } else {
            links.push(format!("{}{}", base_url, href));
        }
    }

    links
}

/// Scrapes the characteristics block of a detail page into an ordered
/// name -> value map.
///
/// The value lives in either a span or a div variant; the span is tried
/// first. Rows missing a name or both value variants are skipped. A
/// page without the block at all yields an empty map. Repeated names
/// overwrite, last one wins.
pub fn extract_characteristics(detail_html: &str) -> CharacteristicMap {
    let doc = Html::parse_document(detail_html);
    let mut characteristics = CharacteristicMap::new();

    for item in doc.select(&selectors::CHARACTERISTIC_ITEM) {
        let Some(name_el) = item.select(&selectors::ITEM_NAME).next() else {
            continue;
        };
        let name = element_text(&name_el);
        let name = name.trim_end_matches(':');

        let value = item
            .select(&selectors::ITEM_VALUE_SPAN)
            .next()
            .or_else(|| item.select(&selectors::ITEM_VALUE_DIV).next());
        if let Some(value_el) = value {
            characteristics.insert(name.to_string(), element_text(&value_el));
        }
    }

    characteristics
}

fn element_text(el: &scraper::ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://ecco.kz";

    #[test]
    fn links_preserve_source_order_and_duplicates() {
        let html = r#"
            <div class="catalog">
                <a class="detail" href="/catalog/420113/01001/item1/">one</a>
                <a class="detail" href="/catalog/420113/01001/item2/">two</a>
                <a class="detail" href="/catalog/420113/01001/item1/">one again</a>
            </div>
        "#;
        let links = extract_links(html, BASE);
        assert_eq!(
            links,
            vec![
                "https://ecco.kz/catalog/420113/01001/item1/",
                "https://ecco.kz/catalog/420113/01001/item2/",
                "https://ecco.kz/catalog/420113/01001/item1/",
            ]
        );
    }

    #[test]
    fn absolute_hrefs_pass_through_unchanged() {
        let html = r#"<a class="detail" href="https://cdn.ecco.kz/item5/">x</a>"#;
        let links = extract_links(html, BASE);
        assert_eq!(links, vec!["https://cdn.ecco.kz/item5/"]);
    }

    #[test]
    fn anchors_without_href_or_marker_class_are_ignored() {
        let html = r#"
            <a class="detail">no href</a>
            <a href="/catalog/420113/01001/item9/">no marker class</a>
        "#;
        assert!(extract_links(html, BASE).is_empty());
    }

    #[test]
    fn empty_listing_yields_empty_link_set() {
        assert!(extract_links("<html><body></body></html>", BASE).is_empty());
    }

    #[test]
    fn characteristics_are_scraped_in_page_order() {
        let html = r#"
            <div class="product-characteristic">
                <div class="item">
                    <span class="item-name">Размерный ряд:</span>
                    <span class="item-value"> 36-42 </span>
                </div>
                <div class="item">
                    <span class="item-name">Сезонность:</span>
                    <div class="item-value">Зима</div>
                </div>
            </div>
        "#;
        let map = extract_characteristics(html);
        assert_eq!(map.len(), 2);
        let entries: Vec<_> = map.iter().collect();
        assert_eq!(
            entries[0],
            (&"Размерный ряд".to_string(), &"36-42".to_string())
        );
        assert_eq!(entries[1], (&"Сезонность".to_string(), &"Зима".to_string()));
    }

    #[test]
    fn item_without_any_value_variant_is_skipped() {
        let html = r#"
            <div class="product-characteristic">
                <div class="item">
                    <span class="item-name">Верх:</span>
                    <span class="item-value">Кожа</span>
                </div>
                <div class="item">
                    <span class="item-name">Подкладка:</span>
                </div>
            </div>
        "#;
        let map = extract_characteristics(html);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("Верх").map(String::as_str), Some("Кожа"));
        assert!(!map.contains_key("Подкладка"));
    }

    #[test]
    fn duplicate_name_last_value_wins() {
        let html = r#"
            <div class="product-characteristic">
                <div class="item">
                    <span class="item-name">Стелька:</span>
                    <span class="item-value">Текстиль</span>
                </div>
                <div class="item">
                    <span class="item-name">Стелька:</span>
                    <span class="item-value">Кожа</span>
                </div>
            </div>
        "#;
        let map = extract_characteristics(html);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("Стелька").map(String::as_str), Some("Кожа"));
    }

    #[test]
    fn missing_characteristics_block_yields_empty_map() {
        let map = extract_characteristics("<html><body><p>404</p></body></html>");
        assert!(map.is_empty());
    }
}
