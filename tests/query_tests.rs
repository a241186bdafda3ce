use anagram_finder::{search_anagram, DictionaryIndex, NOT_FOUND};

fn index_of(words: &[&str]) -> DictionaryIndex {
    let mut index = DictionaryIndex::new();
    for word in words {
        index.insert((*word).to_string());
    }
    index
}

#[test]
fn test_finds_anagram() {
    let index = index_of(&["silent", "listen"]);
    assert_eq!(search_anagram(&index, "listen"), Some("silent"));
}

#[test]
fn test_finds_longer_anagram() {
    let index = index_of(&["recitals", "articles"]);
    assert_eq!(search_anagram(&index, "recitals"), Some("articles"));
}

#[test]
fn test_absent_key_not_found() {
    let index = index_of(&["silent", "listen"]);
    assert_eq!(search_anagram(&index, "we"), None);
    assert_eq!(search_anagram(&index, "zzq"), None);
}

#[test]
fn test_excludes_query_word_itself() {
    let index = index_of(&["listen"]);
    assert_eq!(search_anagram(&index, "listen"), None);
}

#[test]
fn test_excludes_case_variants_of_query() {
    // "aA" and "Aa" share a bucket; a case-insensitive match of the query's
    // spelling is not an anagram of it.
    let index = index_of(&["aA"]);
    assert_eq!(search_anagram(&index, "Aa"), None);
}

#[test]
fn test_tie_break_by_insertion_order() {
    let index = index_of(&["eat", "tea", "ate", "eta"]);
    assert_eq!(search_anagram(&index, "eat"), Some("tea"));
    assert_eq!(search_anagram(&index, "tea"), Some("eat"));
}

#[test]
fn test_case_sensitive_keys() {
    // 'E' and 'e' are distinct characters, so these never share a bucket.
    let index = index_of(&["tea"]);
    assert_eq!(search_anagram(&index, "Eat"), None);
}

#[test]
fn test_empty_query() {
    let index = index_of(&["silent", "listen"]);
    assert_eq!(search_anagram(&index, ""), None);
}

#[test]
fn test_empty_index() {
    let index = DictionaryIndex::new();
    assert_eq!(search_anagram(&index, "listen"), None);
}

#[test]
fn test_not_found_rendering() {
    let index = DictionaryIndex::new();
    let rendered = search_anagram(&index, "pear").unwrap_or(NOT_FOUND);
    assert_eq!(rendered, "not found here");
}

#[test]
fn test_calibration_words() {
    let index = index_of(&["apple", "mango", "banana"]);
    assert_eq!(search_anagram(&index, "leppa"), Some("apple"));
    assert_eq!(search_anagram(&index, "among"), Some("mango"));
    assert_eq!(search_anagram(&index, "pear"), None);
}
