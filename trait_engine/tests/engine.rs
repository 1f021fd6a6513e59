// SPDX-License-Identifier: MIT OR Apache-2.0
//! End-to-end behavior of the trait engine public API.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use trait_engine::{
    dominant_component, euclidean_distance, max_distance, rank_neighbors, similarity,
    EngineConfig, MatchOptions, TraitDimension, TraitError, TraitIndex, TraitScores, TraitVector,
    TRAIT_COUNT,
};

fn random_vector(rng: &mut ChaCha8Rng) -> Vec<f64> {
    (0..TRAIT_COUNT).map(|_| rng.random_range(0.0..=10.0)).collect()
}

#[test]
fn distance_of_unit_steps() {
    let a = [8.0, 2.0, 9.0, 1.0, 3.0, 5.0];
    let b = [7.0, 3.0, 9.0, 1.0, 4.0, 5.0];
    let d = euclidean_distance(&a, &b).unwrap();
    assert!((d - 3f64.sqrt()).abs() < 1e-12);
}

#[test]
fn distance_is_a_metric() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    for _ in 0..200 {
        let a = random_vector(&mut rng);
        let b = random_vector(&mut rng);
        let c = random_vector(&mut rng);

        let ab = euclidean_distance(&a, &b).unwrap();
        let ba = euclidean_distance(&b, &a).unwrap();
        let ac = euclidean_distance(&a, &c).unwrap();
        let bc = euclidean_distance(&b, &c).unwrap();

        assert!(ab >= 0.0);
        assert!((ab - ba).abs() < 1e-12);
        assert_eq!(euclidean_distance(&a, &a).unwrap(), 0.0);
        assert!(ac <= ab + bc + 1e-9);
        assert!(ab <= max_distance(TRAIT_COUNT, 0.0, 10.0) + 1e-9);
    }
}

#[test]
fn dominant_prefers_first_on_tie() {
    assert_eq!(dominant_component(&[3.0, 7.0, 7.0, 1.0]).unwrap(), 1);
    assert_eq!(dominant_component(&[5.0; 6]).unwrap(), 0);
    assert_eq!(dominant_component(&[]), Err(TraitError::EmptyVector));
}

#[test]
fn similarity_endpoints() {
    let max = max_distance(TRAIT_COUNT, 0.0, 10.0);
    assert!((max - 600f64.sqrt()).abs() < 1e-12);
    assert_eq!(similarity(0.0, max), 1.0);
    assert!(similarity(max, max).abs() < 1e-12);
}

#[test]
fn scores_reject_out_of_range() {
    let scores = TraitScores {
        sporty: 5.0,
        creative: 5.0,
        social: 11.0,
        logical: 5.0,
        adventurous: 5.0,
        calm: 5.0,
    };
    let err = TraitVector::try_from(scores).unwrap_err();
    assert_eq!(
        err,
        TraitError::ScoreOutOfRange {
            dimension: TraitDimension::Social,
            value: 11.0
        }
    );
}

#[test]
fn vector_json_uses_named_traits() {
    let json = r#"{"sporty":8,"creative":2,"social":9,"logical":1,"adventurous":3,"calm":5}"#;
    let vector: TraitVector = serde_json::from_str(json).unwrap();
    assert_eq!(vector.dominant_trait(), TraitDimension::Social);

    let bad = r#"{"sporty":-1,"creative":2,"social":9,"logical":1,"adventurous":3,"calm":5}"#;
    assert!(serde_json::from_str::<TraitVector>(bad).is_err());
}

#[test]
fn ranking_matches_brute_force() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let candidates: Vec<(i64, Vec<f64>)> =
        (0..300).map(|i| (i, random_vector(&mut rng))).collect();
    let target = random_vector(&mut rng);

    let ranked = rank_neighbors(&target, &candidates, &MatchOptions::new().with_top_k(10)).unwrap();
    assert_eq!(ranked.len(), 10);

    let mut brute: Vec<f64> = candidates
        .iter()
        .map(|(_, v)| euclidean_distance(&target, v).unwrap())
        .collect();
    brute.sort_by(f64::total_cmp);
    for (m, expected) in ranked.iter().zip(&brute) {
        assert!((m.distance - expected).abs() < 1e-12);
    }
}

#[test]
fn index_flow_from_answers_to_atlas() {
    let index = TraitIndex::with_config(EngineConfig::default()).unwrap();
    let people = [
        (1, [8.0, 2.0, 9.0, 1.0, 3.0, 5.0]),
        (2, [7.0, 3.0, 9.0, 1.0, 4.0, 5.0]),
        (3, [1.0, 9.0, 2.0, 8.0, 1.0, 7.0]),
        (4, [2.0, 8.0, 1.0, 9.0, 2.0, 8.0]),
        (5, [9.0, 1.0, 5.0, 2.0, 10.0, 0.0]),
        (6, [5.0, 5.0, 5.0, 5.0, 5.0, 5.0]),
        (7, [0.0, 0.0, 10.0, 0.0, 0.0, 0.0]),
    ];
    for (key, scores) in people {
        index.upsert(key, TraitVector::new(scores).unwrap());
    }

    let matches = index.matches_for(1).unwrap();
    assert_eq!(matches.len(), 5);
    assert_eq!(matches[0].key, 2);
    assert!(matches.iter().all(|m| m.key != 1));

    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let atlas = index.atlas(&mut rng).unwrap();
    assert_eq!(atlas.nodes.len(), people.len());
    assert_eq!(atlas.node(3).unwrap().dominant, TraitDimension::Creative);
    assert_eq!(atlas.node(6).unwrap().dominant, TraitDimension::Sporty);
    assert!(atlas
        .links
        .iter()
        .any(|l| (l.source, l.target) == (1, 2)));
    assert!(atlas.links.iter().all(|l| l.source < l.target));

    // Close pairs sit closer on the plane than opposite ones
    let n1 = atlas.node(1).unwrap();
    let n2 = atlas.node(2).unwrap();
    let n4 = atlas.node(4).unwrap();
    let near = (n1.x - n2.x).hypot(n1.y - n2.y);
    let far = (n1.x - n4.x).hypot(n1.y - n4.y);
    assert!(near < far);
}

#[test]
fn removing_an_entry_drops_it_from_matches() {
    let index = TraitIndex::new();
    index.upsert(1, TraitVector::new([1.0; 6]).unwrap());
    index.upsert(2, TraitVector::new([2.0; 6]).unwrap());
    index.upsert(3, TraitVector::new([9.0; 6]).unwrap());

    assert_eq!(index.matches_for(1).unwrap()[0].key, 2);
    index.remove(2);
    let matches = index.matches_for(1).unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].key, 3);
}
