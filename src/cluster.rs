//! Connected-component clustering of same-category grid cells.
//!
//! Used for post-hoc tile analysis: pull every coordinate whose tile index
//! belongs to a category set out of a flattened layer, then group the
//! coordinates into 4-connected clusters and box them.

use std::collections::HashSet;

/// Collect grid coordinates whose tile index belongs to `category`, in
/// ascending flattened-index order. Pure function over the layer data.
pub fn extract_category_tiles(
    tiles: &[i32],
    width: i32,
    category: &HashSet<i32>,
) -> Vec<(i32, i32)> {
    tiles
        .iter()
        .enumerate()
        .filter(|&(_, tile)| category.contains(tile))
        .map(|(idx, _)| (idx as i32 % width, idx as i32 / width))
        .collect()
}

/// Partition coordinates into maximal 4-connected clusters.
///
/// Iterative flood fill: each unvisited coordinate (in input order) seeds a
/// cluster, expanded with an explicit stack so deep clusters cannot blow the
/// call stack. Each expansion step scans the whole candidate list for
/// neighbors - O(n) per step, fine for the tens-to-hundreds of tiles this
/// sees. Every input coordinate ends up in exactly one cluster; no cluster
/// is empty; empty input yields an empty list.
pub fn find_clusters(coords: &[(i32, i32)]) -> Vec<Vec<(i32, i32)>> {
    let mut visited: HashSet<(i32, i32)> = HashSet::new();
    let mut clusters = Vec::new();

    for &seed in coords {
        if visited.contains(&seed) {
            continue;
        }

        let mut cluster = Vec::new();
        let mut stack = vec![seed];
        while let Some(current) = stack.pop() {
            if !visited.insert(current) {
                continue;
            }
            cluster.push(current);
            for &tile in coords {
                if !visited.contains(&tile) && is_neighbor(current, tile) {
                    stack.push(tile);
                }
            }
        }
        clusters.push(cluster);
    }

    clusters
}

/// Component-wise min/max corners of a cluster. `None` for an empty slice.
pub fn bounding_box(cluster: &[(i32, i32)]) -> Option<((i32, i32), (i32, i32))> {
    let (&(first_x, first_y), rest) = cluster.split_first()?;
    let mut top_left = (first_x, first_y);
    let mut bottom_right = (first_x, first_y);
    for &(x, y) in rest {
        top_left.0 = top_left.0.min(x);
        top_left.1 = top_left.1.min(y);
        bottom_right.0 = bottom_right.0.max(x);
        bottom_right.1 = bottom_right.1.max(y);
    }
    Some((top_left, bottom_right))
}

/// 4-adjacency: differ by exactly 1 on one axis, 0 on the other.
/// Diagonals do not connect.
fn is_neighbor(a: (i32, i32), b: (i32, i32)) -> bool {
    (a.0 == b.0 && (a.1 - b.1).abs() == 1) || (a.1 == b.1 && (a.0 - b.0).abs() == 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted_memberships(clusters: &[Vec<(i32, i32)>]) -> Vec<Vec<(i32, i32)>> {
        let mut out: Vec<Vec<(i32, i32)>> = clusters
            .iter()
            .map(|c| {
                let mut c = c.clone();
                c.sort_unstable();
                c
            })
            .collect();
        out.sort();
        out
    }

    #[test]
    fn test_two_clusters() {
        let coords = [(0, 0), (1, 0), (0, 1), (5, 5)];
        let clusters = find_clusters(&coords);
        assert_eq!(clusters.len(), 2);
        assert_eq!(
            sorted_memberships(&clusters),
            vec![vec![(0, 0), (0, 1), (1, 0)], vec![(5, 5)]]
        );
    }

    #[test]
    fn test_diagonal_does_not_connect() {
        let clusters = find_clusters(&[(0, 0), (1, 1)]);
        assert_eq!(clusters.len(), 2);
    }

    #[test]
    fn test_order_independent_membership() {
        let coords = [(0, 0), (1, 0), (0, 1), (5, 5), (5, 6), (2, 0)];
        let shuffled = [(5, 6), (2, 0), (0, 1), (5, 5), (1, 0), (0, 0)];
        assert_eq!(
            sorted_memberships(&find_clusters(&coords)),
            sorted_memberships(&find_clusters(&shuffled))
        );
    }

    #[test]
    fn test_every_coordinate_in_exactly_one_cluster() {
        let coords = [(0, 0), (1, 0), (3, 0), (3, 1), (3, 2), (7, 7)];
        let clusters = find_clusters(&coords);
        let total: usize = clusters.iter().map(|c| c.len()).sum();
        assert_eq!(total, coords.len());
        let unique: HashSet<_> = clusters.iter().flatten().collect();
        assert_eq!(unique.len(), coords.len());
        assert!(clusters.iter().all(|c| !c.is_empty()));
    }

    #[test]
    fn test_empty_input() {
        assert!(find_clusters(&[]).is_empty());
    }

    #[test]
    fn test_extract_category_tiles() {
        let tiles = [1, 49, 2, 50];
        let category: HashSet<i32> = [49, 50].into_iter().collect();
        assert_eq!(
            extract_category_tiles(&tiles, 2, &category),
            vec![(1, 0), (1, 1)]
        );
    }

    #[test]
    fn test_extract_no_matches() {
        let tiles = [1, 2, 3, 4];
        let category: HashSet<i32> = [49].into_iter().collect();
        assert!(extract_category_tiles(&tiles, 2, &category).is_empty());
    }

    #[test]
    fn test_bounding_box() {
        let cluster = [(2, 3), (4, 1), (3, 3)];
        assert_eq!(bounding_box(&cluster), Some(((2, 1), (4, 3))));
        assert_eq!(bounding_box(&[]), None);
    }
}
