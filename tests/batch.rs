//! Batch detection tests.

use resniff::{detect_batch, Origin};

#[test]
fn batch_preserves_order_and_provenance() {
    let items = vec![
        ("direct", b"%PDF-1.4".to_vec(), None),
        ("trailer", vec![0x00, 0x01, 0x02], Some(b"%%EOF".to_vec())),
        ("plain", b"just some text".to_vec(), None),
    ];
    let results = detect_batch(items);
    assert_eq!(results.len(), 3);

    assert_eq!(results[0].path_or_id, "direct");
    assert_eq!(results[0].detection.content_type, "application/pdf");
    assert_eq!(results[0].detection.origin, Origin::Signature);

    assert_eq!(results[1].detection.content_type, "application/pdf");
    assert_eq!(results[1].detection.origin, Origin::Trailer);

    assert_eq!(results[2].detection.content_type, "text/plain; charset=utf-8");
    assert_eq!(results[2].detection.origin, Origin::Fallback);
}

#[cfg(feature = "parallel")]
#[test]
fn parallel_batch_matches_sequential() {
    let items: Vec<(usize, Vec<u8>, Option<Vec<u8>>)> = (0..64)
        .map(|i| {
            if i % 2 == 0 {
                (i, b"%PDF-1.4".to_vec(), None)
            } else {
                (i, vec![0x00, 0x01], Some(b"%%EOF".to_vec()))
            }
        })
        .collect();
    let sequential = resniff::detect_batch(items.clone());
    let parallel = resniff::detect_batch_parallel(&items);
    assert_eq!(sequential.len(), parallel.len());
    for (s, p) in sequential.iter().zip(parallel.iter()) {
        assert_eq!(s.path_or_id, p.path_or_id);
        assert_eq!(s.detection, p.detection);
    }
}
