/*!
 * Tests for SRT parsing, reassembly, and chunking
 */

use subrelay::errors::SubtitleError;
use subrelay::subtitle_processor::{SubtitleCollection, SubtitleEntry};

use crate::common;

#[test]
fn test_parse_srt_withValidContent_shouldParseAllEntries() {
    let entries = SubtitleCollection::parse_srt_string(common::SAMPLE_SRT).unwrap();

    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].seq_num, 1);
    assert_eq!(entries[0].start_time_ms, 1_000);
    assert_eq!(entries[0].end_time_ms, 4_000);
    assert_eq!(entries[0].text, "Hallo allemaal.");
    assert_eq!(entries[2].text, "Tot de volgende keer.");
}

#[test]
fn test_parse_srt_withMultilineText_shouldJoinLines() {
    let content = "1\n00:00:01,000 --> 00:00:04,000\nFirst line\nSecond line\n\n";
    let entries = SubtitleCollection::parse_srt_string(content).unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].text, "First line\nSecond line");
}

#[test]
fn test_parse_srt_withOutOfOrderEntries_shouldSortAndRenumber() {
    let content = "7\n00:00:10,000 --> 00:00:12,000\nLater.\n\n3\n00:00:01,000 --> 00:00:04,000\nEarlier.\n";
    let entries = SubtitleCollection::parse_srt_string(content).unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].seq_num, 1);
    assert_eq!(entries[0].text, "Earlier.");
    assert_eq!(entries[1].seq_num, 2);
    assert_eq!(entries[1].text, "Later.");
}

#[test]
fn test_parse_srt_withEmptyContent_shouldFail() {
    assert!(SubtitleCollection::parse_srt_string("").is_err());
    assert!(SubtitleCollection::parse_srt_string("no timestamps here").is_err());
}

#[test]
fn test_format_timestamp_withVariousValues_shouldUseSrtFormat() {
    assert_eq!(SubtitleEntry::format_timestamp(0), "00:00:00,000");
    assert_eq!(SubtitleEntry::format_timestamp(1_000), "00:00:01,000");
    assert_eq!(SubtitleEntry::format_timestamp(3_661_042), "01:01:01,042");
}

#[test]
fn test_entry_display_withValidEntry_shouldRoundTripThroughParser() {
    let entry = SubtitleEntry::new(1, 1_000, 4_000, "Hello there".to_string());
    let rendered = format!("{}", entry);

    let reparsed = SubtitleCollection::parse_srt_string(&rendered).unwrap();
    assert_eq!(reparsed.len(), 1);
    assert_eq!(reparsed[0], entry);
}

#[test]
fn test_new_validated_withBadInput_shouldReject() {
    assert!(SubtitleEntry::new_validated(1, 4_000, 1_000, "text".to_string()).is_err());
    assert!(SubtitleEntry::new_validated(1, 1_000, 4_000, "   ".to_string()).is_err());
    assert!(SubtitleEntry::new_validated(1, 1_000, 4_000, "ok".to_string()).is_ok());
}

#[test]
fn test_new_validated_withBadTimeRange_shouldReportInvalidEntry() {
    let error = SubtitleEntry::new_validated(7, 4_000, 1_000, "text".to_string()).unwrap_err();

    match error.downcast_ref::<SubtitleError>() {
        Some(SubtitleError::InvalidEntry { seq_num, .. }) => assert_eq!(*seq_num, 7),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_parse_srt_withNoEntries_shouldReportParseError() {
    let error = SubtitleCollection::parse_srt_string("").unwrap_err();

    assert!(matches!(
        error.downcast_ref::<SubtitleError>(),
        Some(SubtitleError::ParseError(_))
    ));
}

#[test]
fn test_with_translated_texts_withMatchingCount_shouldPreserveTiming() {
    let entries = SubtitleCollection::parse_srt_string(common::SAMPLE_SRT).unwrap();
    let collection = SubtitleCollection {
        source_file: "source.srt".into(),
        entries,
        source_language: "nl".to_string(),
    };

    let texts = vec![
        "Hello everyone.".to_string(),
        "Welcome to this video.".to_string(),
        "Until next time.".to_string(),
    ];
    let translated = collection.with_translated_texts(&texts, "en").unwrap();

    assert_eq!(translated.source_language, "en");
    assert_eq!(translated.entries.len(), 3);
    for (original, result) in collection.entries.iter().zip(translated.entries.iter()) {
        assert_eq!(original.seq_num, result.seq_num);
        assert_eq!(original.start_time_ms, result.start_time_ms);
        assert_eq!(original.end_time_ms, result.end_time_ms);
    }
    assert_eq!(translated.entries[0].text, "Hello everyone.");
}

#[test]
fn test_with_translated_texts_withCountMismatch_shouldFail() {
    let entries = SubtitleCollection::parse_srt_string(common::SAMPLE_SRT).unwrap();
    let collection = SubtitleCollection {
        source_file: "source.srt".into(),
        entries,
        source_language: "nl".to_string(),
    };

    let result = collection.with_translated_texts(&["only one".to_string()], "en");
    assert!(result.is_err());
}

#[test]
fn test_split_into_chunks_withEntryLimit_shouldRespectLimit() {
    let entries: Vec<SubtitleEntry> = (0..5)
        .map(|i| SubtitleEntry::new(i + 1, (i as u64) * 2_000, (i as u64) * 2_000 + 1_000, format!("entry {}", i)))
        .collect();
    let collection = SubtitleCollection {
        source_file: "source.srt".into(),
        entries,
        source_language: "nl".to_string(),
    };

    let chunks = collection.split_into_chunks(2, 10_000);

    assert_eq!(chunks.len(), 3);
    assert_eq!(chunks[0].len(), 2);
    assert_eq!(chunks[1].len(), 2);
    assert_eq!(chunks[2].len(), 1);

    // No entry may be lost or reordered by chunking
    let flattened: Vec<usize> = chunks.iter().flatten().map(|e| e.seq_num).collect();
    assert_eq!(flattened, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_split_into_chunks_withOversizedEntry_shouldIsolateIt() {
    let entries = vec![
        SubtitleEntry::new(1, 0, 1_000, "short".to_string()),
        SubtitleEntry::new(2, 2_000, 3_000, "x".repeat(500)),
        SubtitleEntry::new(3, 4_000, 5_000, "short again".to_string()),
    ];
    let collection = SubtitleCollection {
        source_file: "source.srt".into(),
        entries,
        source_language: "nl".to_string(),
    };

    let chunks = collection.split_into_chunks(10, 100);

    assert_eq!(chunks.len(), 3);
    assert_eq!(chunks[1].len(), 1);
    assert_eq!(chunks[1][0].seq_num, 2);
}

#[test]
fn test_write_to_srt_withEntries_shouldProduceReadableFile() {
    let temp_dir = common::create_temp_dir().unwrap();
    let path = temp_dir.path().join("out.srt");

    let entries = SubtitleCollection::parse_srt_string(common::SAMPLE_SRT).unwrap();
    let collection = SubtitleCollection {
        source_file: "source.srt".into(),
        entries,
        source_language: "nl".to_string(),
    };
    collection.write_to_srt(&path).unwrap();

    let reloaded = SubtitleCollection::load_from_file(&path, "nl").unwrap();
    assert_eq!(reloaded.entries, collection.entries);
}
