use indexmap::IndexMap;

/// Flat name -> value mapping scraped from one detail page.
///
/// Ordered so the JSON output lists characteristics in page order.
/// Values are plain text, trimmed but otherwise untyped.
pub type CharacteristicMap = IndexMap<String, String>;

/// One entry per successfully processed product, in listing order.
pub type ResultSet = Vec<CharacteristicMap>;
