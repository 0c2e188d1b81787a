use topo_mesh::prelude::*;

fn mesh_with_vertices(n: u32) -> Mesh {
    let mut mesh = Mesh::new();
    for _ in 0..n {
        mesh.add_vertex().unwrap();
    }
    mesh
}

#[test]
fn attach_appends_and_reindexes() {
    let mut target = mesh_with_vertices(5);
    target.add_face(0, 1, 2).unwrap();

    let mut block = mesh_with_vertices(3);
    block.set_vertex_flag(0, 100).unwrap();
    block.set_vertex_flag(2, 102).unwrap();
    block.add_face(0, 1, 2).unwrap();

    let face_start = target.attach_local_block(&block, 0, 1).expect("attach");
    assert_eq!(face_start, 1);
    assert_eq!(target.vertex_count(), 8);
    assert_eq!(target.face_count(), 2);
    assert_eq!(target.faces()[1], [5, 6, 7]);
    // Flags come over verbatim at the shifted positions.
    assert_eq!(target.vertex_flag(5).unwrap(), 100);
    assert_eq!(target.vertex_flag(6).unwrap(), 0);
    assert_eq!(target.vertex_flag(7).unwrap(), 102);
    check_consistency(&target).unwrap();
}

#[test]
fn attach_leaves_block_untouched() {
    let mut target = mesh_with_vertices(2);
    let mut block = mesh_with_vertices(3);
    block.add_face(0, 1, 2).unwrap();
    let before_flags = block.vertex_flags().to_vec();
    let before_faces = block.faces().to_vec();

    target.attach_local_block(&block, 0, 1).unwrap();
    assert_eq!(block.vertex_flags(), &before_flags[..]);
    assert_eq!(block.faces(), &before_faces[..]);
}

#[test]
fn attach_edge_parameters_are_reserved_no_ops() {
    // No gluing: the result is identical for any attach edge.
    let block = {
        let mut b = mesh_with_vertices(3);
        b.add_face(0, 1, 2).unwrap();
        b
    };
    let mut first = mesh_with_vertices(4);
    let mut second = mesh_with_vertices(4);
    first.attach_local_block(&block, 0, 1).unwrap();
    second.attach_local_block(&block, 2, 3).unwrap();
    assert_eq!(first.faces(), second.faces());
    assert_eq!(first.vertex_count(), second.vertex_count());
}

#[test]
fn attach_empty_block_returns_current_face_count() {
    let mut target = mesh_with_vertices(3);
    target.add_face(0, 1, 2).unwrap();
    let face_start = target.attach_local_block(&Mesh::new(), 0, 0).unwrap();
    assert_eq!(face_start, 1);
    assert_eq!(target.vertex_count(), 3);
    assert_eq!(target.face_count(), 1);
}

#[test]
fn permutation_then_inverse_restores_faces() {
    let mut mesh = mesh_with_vertices(5);
    mesh.add_face(0, 1, 2).unwrap();
    mesh.add_face(2, 3, 4).unwrap();
    mesh.set_vertex_flag(0, 0xa).unwrap();
    mesh.set_vertex_flag(4, 0xe).unwrap();
    let original_faces = mesh.faces().to_vec();
    let original_flags = mesh.vertex_flags().to_vec();

    let perm = [4u32, 3, 2, 1, 0];
    let inv = invert_permutation(&perm).unwrap();
    apply_permutation(&mut mesh, &perm).unwrap();
    assert_eq!(mesh.faces()[0], [4, 3, 2]);
    assert_eq!(mesh.vertex_flag(4).unwrap(), 0xa);

    apply_permutation(&mut mesh, &inv).unwrap();
    assert_eq!(mesh.faces(), &original_faces[..]);
    assert_eq!(mesh.vertex_flags(), &original_flags[..]);
}

#[test]
fn non_bijective_permutation_is_silently_permitted() {
    // Accepted scaffold limitation: duplicate targets overwrite flags.
    let mut mesh = mesh_with_vertices(3);
    mesh.set_vertex_flag(0, 1).unwrap();
    mesh.set_vertex_flag(1, 2).unwrap();
    mesh.set_vertex_flag(2, 3).unwrap();
    apply_permutation(&mut mesh, &[0, 0, 1]).unwrap();
    // Old vertex 1's word overwrote old vertex 0's; target 2 was never filled.
    assert_eq!(mesh.vertex_flag(0).unwrap(), 2);
    assert_eq!(mesh.vertex_flag(1).unwrap(), 3);
    assert_eq!(mesh.vertex_flag(2).unwrap(), 0);
}

#[test]
fn permutation_recheck_catches_stale_face_indices() {
    // A permutation shorter than some face index trips the defensive
    // per-face recheck even before the flags step.
    let mut mesh = mesh_with_vertices(3);
    mesh.add_face(0, 1, 2).unwrap();
    let err = apply_permutation(&mut mesh, &[0, 1]).unwrap_err();
    assert_eq!(err.kind(), MeshErrorKind::InvalidArgument);
}
