use crate::bkdforest::BKDForest;
use crate::geometry::{BBox, LonLat};
use crate::point::Point;
use crate::r#trait::SpatialIndex;

fn pt(id: usize, lon: f64, lat: f64) -> Point<usize> {
    Point::new(id, lon, lat)
}

fn bbox(upper: (f64, f64), lower: (f64, f64)) -> BBox {
    BBox::new(LonLat::new(upper.0, upper.1), LonLat::new(lower.0, lower.1))
}

#[test]
fn forest_of_one_tree_for_small_input() {
    let points: Vec<_> = (0..5).map(|i| pt(i, i as f64, 0.0)).collect();
    let forest = BKDForest::build(points, 10).unwrap();
    assert_eq!(forest.num_trees(), 1);
    assert_eq!(forest.num_points(), 5);
}

#[test]
fn forest_partitions_disjointly_and_covers_every_point() {
    let n = 5_000;
    let points: Vec<_> = (0..n)
        .map(|i| pt(i, ((i * 97) % 36000) as f64 / 100.0 - 180.0, 0.0))
        .collect();
    let forest = BKDForest::build(points, 16).unwrap();

    let mut spans: Vec<(usize, usize)> = forest.trees().iter().map(|t| t.span()).collect();
    spans.sort();
    let mut covered = 0;
    for (i, (start, end)) in spans.iter().enumerate() {
        assert!(end > start);
        if i == 0 {
            assert_eq!(*start, 0);
        } else {
            assert_eq!(*start, spans[i - 1].1, "slices must be contiguous and disjoint");
        }
        covered += end - start;
    }
    assert_eq!(covered, n);
    assert_eq!(spans.last().unwrap().1, n);
}

#[test]
fn correctness_vs_brute_force_random_points() {
    use rand::Rng;
    let mut rng = rand::thread_rng();

    let n = 3_000;
    let points: Vec<_> = (0..n)
        .map(|i| {
            let lon = rng.gen_range(-180.0..180.0);
            let lat = rng.gen_range(-90.0..90.0);
            pt(i, lon, lat)
        })
        .collect();
    let brute = points.clone();

    let forest = BKDForest::build(points, 24).unwrap();

    for _ in 0..50 {
        let (mut lon_a, mut lon_b) = (rng.gen_range(-180.0..180.0), rng.gen_range(-180.0..180.0));
        if lon_a > lon_b {
            std::mem::swap(&mut lon_a, &mut lon_b);
        }
        let (mut lat_a, mut lat_b) = (rng.gen_range(-90.0..90.0), rng.gen_range(-90.0..90.0));
        if lat_a > lat_b {
            std::mem::swap(&mut lat_a, &mut lat_b);
        }
        let query = bbox((lon_b, lat_b), (lon_a, lat_a));

        let mut hits = Vec::new();
        forest.contains(&query, &mut hits);

        let expected: Vec<usize> = brute
            .iter()
            .filter(|p| query.point_in_box(&p.lon_lat()))
            .map(|p| p.id)
            .collect();

        hits.sort();
        let mut expected_sorted = expected.clone();
        expected_sorted.sort();
        assert_eq!(hits, expected_sorted);
    }
}

#[test]
#[ignore]
fn correctness_vs_brute_force_300k_points() {
    use rand::Rng;
    let mut rng = rand::thread_rng();

    let n = 300_000;
    let points: Vec<_> = (0..n)
        .map(|i| {
            let lon = rng.gen_range(-180.0..180.0);
            let lat = rng.gen_range(-90.0..90.0);
            pt(i, lon, lat)
        })
        .collect();
    let brute = points.clone();

    let forest = BKDForest::build(points, 1024).unwrap();

    for _ in 0..100 {
        let (mut lon_a, mut lon_b) = (rng.gen_range(-180.0..180.0), rng.gen_range(-180.0..180.0));
        if lon_a > lon_b {
            std::mem::swap(&mut lon_a, &mut lon_b);
        }
        let (mut lat_a, mut lat_b) = (rng.gen_range(-90.0..90.0), rng.gen_range(-90.0..90.0));
        if lat_a > lat_b {
            std::mem::swap(&mut lat_a, &mut lat_b);
        }
        let query = bbox((lon_b, lat_b), (lon_a, lat_a));

        let mut hits = Vec::new();
        forest.contains(&query, &mut hits);

        let expected_count = brute
            .iter()
            .filter(|p| query.point_in_box(&p.lon_lat()))
            .count();

        assert_eq!(hits.len(), expected_count);
    }
}
