use std::sync::Arc;
use std::thread;

use crate::segment::{segments_to_string, segments_to_words};
use crate::tests::init_logger;
use crate::{Dictionary, LexType, Mode, Segment, Segmenter};

const TEST_DICT1: &str = include_str!("./resources/test_dict1.txt");
const TEST_DICT2: &str = include_str!("./resources/test_dict2.txt");

fn test_segmenter() -> Segmenter {
    init_logger();
    let dict = Dictionary::from_readers([
        ("test_dict1.txt", TEST_DICT1.as_bytes()),
        ("test_dict2.txt", TEST_DICT2.as_bytes()),
    ])
    .unwrap();
    Segmenter::new(dict)
}

fn bundled_segmenter() -> Segmenter {
    init_logger();
    Segmenter::new(Dictionary::bundled().unwrap())
}

fn ranges(segments: &[Segment]) -> Vec<(usize, usize)> {
    segments.iter().map(|s| (s.start(), s.end())).collect()
}

/// 通常モードの結果が入力全体を隙間なく覆うことを確認します。
fn assert_partition(input: &str, segments: &[Segment]) {
    let mut pos = 0;
    for seg in segments.iter().filter(|s| s.depth() == 0) {
        assert_eq!(seg.start(), pos, "gap or overlap before {:?}", seg.surface());
        assert!(seg.start() < seg.end());
        assert_eq!(&input[seg.range_byte()], seg.surface());
        pos = seg.end();
    }
    assert_eq!(pos, input.len());
}

#[test]
fn test_merged_dictionaries() {
    let segmenter = test_segmenter();
    let dict = segmenter.dictionary();
    assert_eq!(dict.num_tokens(), 12);
    assert_eq!(dict.total_frequency(), 67);
    assert_eq!(dict.get("中国").unwrap().frequency(), 30);
    assert_eq!(dict.get("有").unwrap().frequency(), 10);
    assert_eq!(dict.get("有").unwrap().tag(), "p3");
}

#[test]
fn test_segment_test_dicts() {
    let segmenter = test_segmenter();
    let input = "中国有十三亿人口";
    let segments = segmenter.segment(input, Mode::Normal);

    assert_eq!(
        segments_to_string(&segments, false),
        "中国/ 有/p3 十三亿/ 人口/p12"
    );
    assert_eq!(ranges(&segments), vec![(0, 6), (6, 9), (9, 18), (18, 24)]);
    assert!(segments.iter().all(|s| s.lex_type() == LexType::System));
    assert_partition(input, &segments);
}

#[test]
fn test_segment_test_dicts_search() {
    let segmenter = test_segmenter();
    let segments = segmenter.segment("中国有十三亿人口", Mode::Search);
    assert_eq!(
        segments_to_string(&segments, false),
        "中国/ 有/p3 十三/ 亿/ 十三亿/ 人口/p12"
    );
    assert_eq!(
        segments.iter().map(|s| s.depth()).collect::<Vec<_>>(),
        vec![0, 0, 1, 1, 0, 0]
    );
}

#[test]
fn test_segment_bundled() {
    let segmenter = bundled_segmenter();
    let segments = segmenter.segment("中国人口", Mode::Normal);
    assert_eq!(segments_to_string(&segments, false), "中国/ns 人口/n");
}

#[test]
fn test_segment_bundled_compound() {
    let segmenter = bundled_segmenter();
    let input = "中华人民共和国中央人民政府";
    let segments = segmenter.segment(input, Mode::Normal);
    assert_eq!(
        segments_to_string(&segments, false),
        "中华人民共和国/ns 中央人民政府/nt"
    );
    assert_eq!(ranges(&segments), vec![(0, 21), (21, 39)]);
}

#[test]
fn test_segment_bundled_search() {
    let segmenter = bundled_segmenter();
    let input = "中华人民共和国中央人民政府";
    let segments = segmenter.segment(input, Mode::Search);
    assert_eq!(
        segments_to_string(&segments, false),
        "中华/nz 人民/n 共和/nz 国/n 共和国/ns 人民共和国/nt 中华人民共和国/ns \
         中央/n 人民/n 政府/n 人民政府/nt 中央人民政府/nt"
    );
    assert_eq!(segments.len(), 12);
    assert_partition(input, &segments);

    // Every sub-word lies inside a top-level word.
    let top: Vec<_> = segments.iter().filter(|s| s.depth() == 0).collect();
    for seg in segments.iter().filter(|s| s.depth() > 0) {
        assert!(
            top.iter()
                .any(|t| t.start() <= seg.start() && seg.end() <= t.end())
        );
    }
    assert_eq!(segments[2].text(), "共和");
    assert_eq!(segments[2].depth(), 3);
    assert_eq!(segments[6].depth(), 0);
}

#[test]
fn test_segment_surface_only() {
    let segmenter = bundled_segmenter();
    let segments = segmenter.segment("中华人民共和国中央人民政府", Mode::Normal);
    assert_eq!(
        segments_to_string(&segments, true),
        "中华人民共和国/ 中央人民政府/"
    );
    assert_eq!(
        segments_to_words(&segments),
        vec!["中华人民共和国", "中央人民政府"]
    );
}

#[test]
fn test_segment_mixed_script() {
    let segmenter = bundled_segmenter();
    let input = "中国雅虎Yahoo! China致力于，领先的公益民生门户网站。";
    let segments = segmenter.segment(input, Mode::Normal);
    assert_eq!(
        segments_to_string(&segments, false),
        "中国/ns 雅虎/nz yahoo/ !/  / china/ 致力于/v ，/ 领先/v 的/uj 公益/n 民生/n 门户网站/n 。/"
    );
    assert_partition(input, &segments);

    let yahoo = &segments[2];
    assert_eq!(yahoo.surface(), "Yahoo");
    assert_eq!(yahoo.text(), "yahoo");
    assert_eq!(yahoo.lex_type(), LexType::Unknown);
    assert_eq!(yahoo.frequency(), 0);
}

#[test]
fn test_segment_mixed_script_search() {
    let segmenter = bundled_segmenter();
    let input = "中国雅虎Yahoo! China致力于，领先的公益民生门户网站。";
    let segments = segmenter.segment(input, Mode::Search);
    assert_eq!(
        segments_to_words(&segments),
        vec![
            "中国", "雅虎", "yahoo", "!", " ", "china", "致力", "于", "致力于", "，", "领先",
            "的", "公益", "民生", "门户", "网站", "门户网站", "。",
        ]
    );
    assert_partition(input, &segments);
}

#[test]
fn test_segment_latin() {
    let segmenter = test_segmenter();
    let input = "Wie geht es Ihnen";
    let segments = segmenter.segment(input, Mode::Normal);
    assert_eq!(
        segments_to_words(&segments),
        vec!["wie", " ", "geht", " ", "es", " ", "ihnen"]
    );
    assert_eq!(segments[6].surface(), "Ihnen");
    assert!(segments.iter().all(|s| s.is_unknown()));
    assert_partition(input, &segments);
}

#[test]
fn test_segment_dictionary_latin_word() {
    let dict = Dictionary::from_readers([("t", "GitHub 5 nz\n- 1 x\n".as_bytes())]).unwrap();
    let segmenter = Segmenter::new(dict);
    let segments = segmenter.segment("GitHub web-based", Mode::Normal);
    assert_eq!(
        segments_to_string(&segments, false),
        "github/nz  / web/ -/x based/"
    );
    assert_eq!(segments[0].surface(), "GitHub");
    assert_eq!(segments[0].lex_type(), LexType::System);
}

#[test]
fn test_segment_unknown_run() {
    let segmenter = test_segmenter();
    let input = "火星";
    let segments = segmenter.segment(input, Mode::Normal);
    assert_eq!(ranges(&segments), vec![(0, 3), (3, 6)]);
    for seg in &segments {
        assert!(seg.is_unknown());
        assert_eq!(seg.frequency(), 0);
        assert_eq!(seg.tag(), "");
    }
    assert_eq!(segments_to_string(&segments, false), "火/ 星/");
}

#[test]
fn test_segment_empty() {
    let segmenter = test_segmenter();
    assert!(segmenter.segment("", Mode::Normal).is_empty());
    assert!(segmenter.segment("", Mode::Search).is_empty());
}

#[test]
fn test_segment_empty_dictionary() {
    let dict = Dictionary::from_readers([("empty", "".as_bytes())]).unwrap();
    let segmenter = Segmenter::new(dict);
    let input = "中国 abc";
    let segments = segmenter.segment(input, Mode::Search);
    assert_eq!(segments_to_words(&segments), vec!["中", "国", " ", "abc"]);
    assert_partition(input, &segments);
}

#[test]
fn test_segment_kana_hangul() {
    let dict = Dictionary::from_readers([(
        "t",
        "こんにちは 10\n안녕하세요 10\n세계 5\n".as_bytes(),
    )])
    .unwrap();
    let segmenter = Segmenter::new(dict);
    let input = "こんにちは 안녕하세요세계";
    let segments = segmenter.segment(input, Mode::Normal);
    assert_eq!(
        segments_to_words(&segments),
        vec!["こんにちは", " ", "안녕하세요", "세계"]
    );
    assert_partition(input, &segments);
}

#[test]
fn test_segment_deterministic() {
    let segmenter = bundled_segmenter();
    let input = "中华人民共和国中央人民政府，中国有十三亿人口。";
    for mode in [Mode::Normal, Mode::Search] {
        let first = segmenter.segment(input, mode);
        for _ in 0..3 {
            assert_eq!(segmenter.segment(input, mode), first);
        }
    }
}

#[test]
fn test_normal_is_top_level_of_search() {
    let segmenter = bundled_segmenter();
    let input = "北京大学的学生在中华人民共和国学习汉语";
    let normal = segmenter.segment(input, Mode::Normal);
    let search: Vec<_> = segmenter
        .segment(input, Mode::Search)
        .into_iter()
        .filter(|s| s.depth() == 0)
        .collect();
    assert_eq!(search, normal);
}

#[test]
fn test_min_expand_len() {
    let segmenter = bundled_segmenter().min_expand_len(5);
    let segments = segmenter.segment("中华人民共和国中央人民政府", Mode::Search);
    // 共和国 and 人民政府 are shorter than five characters and stay whole.
    assert_eq!(
        segments_to_words(&segments),
        vec![
            "中华",
            "人民",
            "共和国",
            "人民共和国",
            "中华人民共和国",
            "中央",
            "人民政府",
            "中央人民政府",
        ]
    );
}

#[test]
fn test_threads_share_segmenter() {
    let dict = Arc::new(Dictionary::bundled().unwrap());
    let segmenter = Segmenter::from_shared_dictionary(dict.clone());
    let expected = segments_to_string(&segmenter.segment("中国人口", Mode::Normal), false);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let segmenter = Segmenter::from_shared_dictionary(dict.clone());
            thread::spawn(move || {
                let mut worker = segmenter.new_worker();
                (0..10)
                    .map(|_| segments_to_string(&worker.segment("中国人口", Mode::Normal), false))
                    .collect::<Vec<_>>()
            })
        })
        .collect();
    for handle in handles {
        for result in handle.join().unwrap() {
            assert_eq!(result, expected);
        }
    }
}

#[test]
fn test_scoped_threads_borrow_segmenter() {
    let segmenter = bundled_segmenter();
    thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                let segments = segmenter.segment("中央人民政府", Mode::Search);
                assert_eq!(
                    segments_to_words(&segments),
                    vec!["中央", "人民", "政府", "人民政府", "中央人民政府"]
                );
            });
        }
    });
}
