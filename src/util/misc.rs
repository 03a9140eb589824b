use std::path::{Path, PathBuf};

use percent_encoding::percent_decode_str;

pub type Res<T = ()> = Result<T, Box<dyn std::error::Error>>;

// ディレクトリ内のファイルのうち指定した拡張子のものを名前順で返却
pub fn get_paths(dir: &Path, ext: &str) -> Res<Vec<PathBuf>> {
    let mut entries = std::fs::read_dir(dir)?
        .map(|res| res.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()?;
    entries.retain(|p| p.extension().is_some_and(|e| e == ext));
    entries.sort();
    Ok(entries)
}

// パーセントエンコーディングを復元 ('+'は変換しない)
// UTF-8として不正なバイト列は置換文字にする
pub fn decode_uri_component(s: &str) -> String {
    percent_decode_str(s).decode_utf8_lossy().into_owned()
}

// ファイル名から拡張子を除いた部分 (牌譜IDとして使用)
pub fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[test]
fn test_decode_uri_component() {
    assert_eq!(decode_uri_component("NoName"), "NoName");
    assert_eq!(
        decode_uri_component("%E3%81%82%E3%81%84"),
        "\u{3042}\u{3044}"
    );
    assert_eq!(decode_uri_component("a%20b+c"), "a b+c");
    assert_eq!(decode_uri_component("100%"), "100%");
    assert_eq!(decode_uri_component("%zz%4"), "%zz%4");
    assert_eq!(decode_uri_component("%FF"), "\u{FFFD}");
    assert_eq!(decode_uri_component(""), "");
}

#[test]
fn test_file_stem() {
    assert_eq!(
        file_stem(Path::new("logs/2019010100gm-00a9-0000-12345678.json")),
        "2019010100gm-00a9-0000-12345678"
    );
}
