//! # JSON ``{ "symbol": id }`` Vocabulary IO

use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use crate::{
    errors::{WMResult, WordmergeError},
    types::{Symbol, TokenType, WMHashMap},
    vocab::SymbolVocab,
};

/// Read a [`SymbolVocab`] from a JSON object of ``{ "symbol": id }``.
///
/// ## Arguments
/// * `reader` - the JSON source.
///
/// ## Returns
/// An error if the document is not a string-to-integer object, an id does
/// not fit in `T`, or the mapping is not a bijection.
pub fn read_json_vocab<T, R>(reader: R) -> WMResult<SymbolVocab<T>>
where
    T: TokenType,
    R: Read,
{
    let raw: BTreeMap<String, u64> = serde_json::from_reader(reader)?;

    let symbol_map = raw
        .into_iter()
        .map(|(symbol, id)| match T::from_u64(id) {
            Some(token) => Ok((Symbol::from(symbol), token)),
            None => Err(WordmergeError::VocabConflict(format!(
                "token id {id} for {symbol:?} exceeds token type capacity"
            ))),
        })
        .collect::<WMResult<WMHashMap<Symbol, T>>>()?;

    SymbolVocab::from_symbol_map(symbol_map)
}

/// Load a [`SymbolVocab`] from a JSON file.
///
/// See [`read_json_vocab`].
pub fn load_json_vocab_path<T, P>(path: P) -> WMResult<SymbolVocab<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let reader = BufReader::new(File::open(path)?);
    read_json_vocab(reader)
}

/// Write a [`SymbolVocab`] as a pretty-printed JSON object of ``{ "symbol": id }``.
///
/// Keys are written in sorted order.
pub fn write_json_vocab<T, W>(
    vocab: &SymbolVocab<T>,
    writer: &mut W,
) -> WMResult<()>
where
    T: TokenType,
    W: Write,
{
    let raw: BTreeMap<&str, u64> = vocab
        .iter()
        .map(|(symbol, token)| match token.to_u64() {
            Some(id) => Ok((symbol.as_str(), id)),
            None => Err(WordmergeError::VocabConflict(format!(
                "token {token} for {symbol:?} is not representable"
            ))),
        })
        .collect::<WMResult<_>>()?;

    serde_json::to_writer_pretty(&mut *writer, &raw)?;
    writeln!(writer)?;
    Ok(())
}

/// Save a [`SymbolVocab`] to a JSON file.
///
/// See [`write_json_vocab`].
pub fn save_json_vocab_path<T, P>(
    vocab: &SymbolVocab<T>,
    path: P,
) -> WMResult<()>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    write_json_vocab(vocab, &mut writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempdir::TempDir;

    use super::*;
    use crate::{
        segmentation::WordSegmenter,
        training::MergeTrainerOptions,
    };

    #[test]
    fn test_read_json_vocab() {
        let json = r#"{"ab": 0, "a": 1, "b": 2, "<unk>": 3}"#;
        let vocab: SymbolVocab<u32> = read_json_vocab(json.as_bytes()).unwrap();

        assert_eq!(vocab.len(), 4);
        assert_eq!(vocab.lookup_token("ab"), Some(0));
        assert_eq!(vocab.lookup_symbol(3).map(|s| s.as_str()), Some("<unk>"));
    }

    #[test]
    fn test_read_json_vocab_rejects_bad_documents() {
        assert!(matches!(
            read_json_vocab::<u32, _>(r#"["a", "b"]"#.as_bytes()),
            Err(WordmergeError::Json(_))
        ));
        assert!(matches!(
            read_json_vocab::<u32, _>(r#"{"a": -1}"#.as_bytes()),
            Err(WordmergeError::Json(_))
        ));
        assert!(matches!(
            read_json_vocab::<u8, _>(r#"{"a": 300}"#.as_bytes()),
            Err(WordmergeError::VocabConflict(_))
        ));
        assert!(matches!(
            read_json_vocab::<u32, _>(r#"{"a": 1, "b": 1}"#.as_bytes()),
            Err(WordmergeError::VocabConflict(_))
        ));
    }

    #[test]
    fn test_write_json_vocab() {
        let json = r#"{"b": 2, "ab": 0, "a": 1}"#;
        let vocab: SymbolVocab<u16> = read_json_vocab(json.as_bytes()).unwrap();

        let mut buf: Vec<u8> = Vec::new();
        write_json_vocab(&vocab, &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "{\n  \"a\": 1,\n  \"ab\": 0,\n  \"b\": 2\n}\n"
        );
    }

    #[test]
    fn test_save_load_vocab() {
        type T = u32;

        let tmp_dir = TempDir::new("vocab_test").unwrap();
        let path = tmp_dir.path().join("vocab.json");

        let segmenter = WordSegmenter::new(None, Some("</w>")).unwrap();
        let vocab: SymbolVocab<T> = MergeTrainerOptions::new(5)
            .init()
            .train_vocab("lower lowest newer newest", &segmenter, "<unk>")
            .unwrap();

        save_json_vocab_path(&vocab, &path).unwrap();
        let loaded: SymbolVocab<T> = load_json_vocab_path(&path).unwrap();

        assert_eq!(loaded, vocab);
    }

    #[test]
    fn test_load_missing_file() {
        let tmp_dir = TempDir::new("vocab_test").unwrap();
        let path = tmp_dir.path().join("missing.json");
        assert!(matches!(
            load_json_vocab_path::<u32, _>(&path),
            Err(WordmergeError::Io(_))
        ));
    }
}
