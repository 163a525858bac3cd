use voxnav_core::{Aabb, IVec3, NavConfig, Vec3};
use voxnav_grid::VoxelGrid;

fn config(cell_distance: f32) -> NavConfig {
    NavConfig {
        cell_distance,
        ..NavConfig::default()
    }
}

#[test]
fn dimensions_are_ceil_of_size_over_spacing_plus_one() {
    let obstacles = [Aabb::new(Vec3::ZERO, Vec3::new(2.0, 2.5, 0.0))];

    let grid = VoxelGrid::build(&obstacles, &config(1.0));
    assert_eq!(grid.dims(), IVec3::new(3, 4, 1));
    assert_eq!(grid.len(), 12);

    let grid = VoxelGrid::build(&obstacles, &config(0.5));
    assert_eq!(grid.dims(), IVec3::new(5, 6, 1));
}

#[test]
fn empty_obstacle_set_builds_a_single_valid_node() {
    let grid = VoxelGrid::build(&[], &config(1.0));

    assert_eq!(grid.dims(), IVec3::new(1, 1, 1));
    assert_eq!(grid.len(), 1);
    let node = grid.get(IVec3::ZERO).expect("origin node");
    assert!(node.is_valid());
    assert_eq!(node.world_position(), Vec3::ZERO);
    assert!(node.neighbors().is_empty());
}

#[test]
#[should_panic(expected = "cell_distance must be > 0")]
fn zero_cell_distance_fails_fast() {
    VoxelGrid::build(&[], &config(0.0));
}

#[test]
fn world_positions_follow_coord_times_spacing_minus_offset() {
    // Bounds centered on the origin: offset = extents - center = (1,1,1).
    let obstacles = [Aabb::new(Vec3::splat(-1.0), Vec3::splat(1.0))];
    let grid = VoxelGrid::build(&obstacles, &config(1.0));

    assert_eq!(grid.dims(), IVec3::new(3, 3, 3));
    assert_eq!(grid.volume_offset(), Vec3::splat(1.0));

    for node in grid.nodes() {
        let expected = node.coord().as_vec3() * 1.0 - grid.volume_offset();
        assert_eq!(node.world_position(), expected);
    }
    // Node (0,0,0) sits on the bounds' min corner.
    let origin = grid.get(IVec3::ZERO).expect("corner node");
    assert_eq!(origin.world_position(), Vec3::splat(-1.0));
}

#[test]
fn neighbor_links_are_six_connected_and_clipped_at_borders() {
    let obstacles = [Aabb::new(Vec3::splat(-1.0), Vec3::splat(1.0))];
    let grid = VoxelGrid::build(&obstacles, &config(1.0));
    assert_eq!(grid.dims(), IVec3::new(3, 3, 3));

    let neighbor_coords = |coord: IVec3| -> Vec<IVec3> {
        grid.get(coord)
            .expect("in-bounds node")
            .neighbors()
            .iter()
            .map(|&id| grid.node(id).coord())
            .collect()
    };

    // Interior: all six, in -x,+x,-y,+y,-z,+z probe order.
    assert_eq!(
        neighbor_coords(IVec3::new(1, 1, 1)),
        vec![
            IVec3::new(0, 1, 1),
            IVec3::new(2, 1, 1),
            IVec3::new(1, 0, 1),
            IVec3::new(1, 2, 1),
            IVec3::new(1, 1, 0),
            IVec3::new(1, 1, 2),
        ]
    );

    // Face node: the outward -x link is missing, nothing else.
    assert_eq!(
        neighbor_coords(IVec3::new(0, 1, 1)),
        vec![
            IVec3::new(1, 1, 1),
            IVec3::new(0, 0, 1),
            IVec3::new(0, 2, 1),
            IVec3::new(0, 1, 0),
            IVec3::new(0, 1, 2),
        ]
    );

    // Edge node: two outward links missing.
    assert_eq!(
        neighbor_coords(IVec3::new(0, 0, 1)),
        vec![IVec3::new(1, 0, 1), IVec3::new(0, 1, 1), IVec3::new(0, 0, 0), IVec3::new(0, 0, 2)]
    );

    // Corner node: only the three inward links.
    assert_eq!(
        neighbor_coords(IVec3::new(2, 2, 2)),
        vec![IVec3::new(1, 2, 2), IVec3::new(2, 1, 2), IVec3::new(2, 2, 1)]
    );
}

#[test]
fn neighbor_links_are_symmetric() {
    let obstacles = [Aabb::new(Vec3::ZERO, Vec3::new(3.0, 2.0, 1.0))];
    let grid = VoxelGrid::build(&obstacles, &config(1.0));

    for (idx, node) in grid.nodes().iter().enumerate() {
        for &neighbor in node.neighbors() {
            let back = grid.node(neighbor).neighbors();
            assert!(
                back.iter().any(|&id| id.index() == idx),
                "link {:?} -> {:?} has no back-link",
                node.coord(),
                grid.node(neighbor).coord()
            );
        }
    }
}

#[test]
fn validity_is_idempotent_across_rebuilds() {
    let obstacles = [
        Aabb::new(Vec3::ZERO, Vec3::new(4.0, 4.0, 0.0)),
        Aabb::from_center_size(Vec3::new(6.0, 0.0, 0.0), Vec3::ZERO),
    ];

    let a = VoxelGrid::build(&obstacles, &config(1.0));
    let b = VoxelGrid::build(&obstacles, &config(1.0));

    assert_eq!(a.len(), b.len());
    for (na, nb) in a.nodes().iter().zip(b.nodes()) {
        assert_eq!(na.coord(), nb.coord());
        assert_eq!(na.is_valid(), nb.is_valid());
    }
}

#[test]
fn adding_obstacles_never_revalidates_a_node() {
    // The extra box sits inside the original merged bounds, so both builds
    // voxelize the same region.
    let base = vec![
        Aabb::new(Vec3::ZERO, Vec3::new(4.0, 4.0, 0.0)),
        Aabb::from_center_size(Vec3::new(6.0, 0.0, 0.0), Vec3::ZERO),
    ];
    let mut superset = base.clone();
    superset.push(Aabb::new(Vec3::new(4.5, 2.5, 0.0), Vec3::new(5.5, 3.5, 0.0)));

    let before = VoxelGrid::build(&base, &config(1.0));
    let after = VoxelGrid::build(&superset, &config(1.0));

    assert_eq!(before.dims(), after.dims());
    let mut newly_invalid = 0;
    for (a, b) in before.nodes().iter().zip(after.nodes()) {
        if !a.is_valid() {
            assert!(!b.is_valid(), "{:?} was un-invalidated", a.coord());
        }
        if a.is_valid() && !b.is_valid() {
            newly_invalid += 1;
        }
    }
    assert!(newly_invalid > 0, "superset box should block something");
}

#[test]
fn validity_is_inclusive_of_obstacle_faces() {
    // Node (0,0,0) of this grid lands exactly on the box's min corner.
    let obstacles = [Aabb::new(Vec3::ZERO, Vec3::new(2.0, 2.0, 2.0))];
    let grid = VoxelGrid::build(&obstacles, &config(1.0));

    for node in grid.nodes() {
        assert!(
            !node.is_valid(),
            "{:?} lies on or inside the box",
            node.coord()
        );
    }
}
