//! Literal syntax for building mappings.

/// Build a `Value::Map` from `key => value` pairs
///
/// Values go through `Value::from`, so primitives, strings, arrays and
/// nested `map!` calls all work directly.
///
/// # Usage
/// ```ignore
/// let doc = map! {
///     "title" => "blog",
///     "theme" => map! { "dark" => true },
/// };
/// ```
#[macro_export]
macro_rules! map {
    () => {
        $crate::Value::Map($crate::Map::new())
    };
    ($($key:expr => $entry:expr),+ $(,)?) => {{
        let mut map = $crate::Map::new();
        $(
            map.insert(::std::string::String::from($key), $crate::Value::from($entry));
        )+
        $crate::Value::Map(map)
    }};
}

#[cfg(test)]
mod tests {
    use crate::Value;

    #[test]
    fn test_map_macro_builds_in_order() {
        let doc = map! {
            "one" => 1,
            "two" => "2",
            "three" => map! {},
        };

        let map = doc.as_map().unwrap();
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, ["one", "two", "three"]);
        assert_eq!(map["one"], Value::Integer(1));
        assert!(map["three"].is_plain_mapping());
    }

    #[test]
    fn test_empty_map_macro() {
        assert_eq!(map! {}, Value::Map(crate::Map::new()));
    }
}
