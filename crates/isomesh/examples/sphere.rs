//! Extracts the isosurface of a spherical squared-distance field and writes
//! it to `sphere.ply`.
//!
//! Run with `cargo run --example sphere`, then open the PLY in any mesh
//! viewer. Set `RUST_LOG=debug` to see extraction stats.

use std::fs::File;

use isomesh::{extract_surface, DenseGrid, IsoMesh};
use ply_rs::ply::{
    Addable, DefaultElement, ElementDef, Encoding, Ply, Property, PropertyDef, PropertyType,
    ScalarType,
};
use ply_rs::writer::Writer;

fn main() -> std::io::Result<()> {
    env_logger::init();

    let grid = DenseGrid::from_fn([10, 10, 10], |x, y, z| {
        let (dx, dy, dz) = (x as f64 - 5.0, y as f64 - 5.0, z as f64 - 5.0);
        dx * dx + dy * dy + dz * dz
    });
    let mesh = extract_surface(&grid, 9.0);
    log::info!(
        "sphere mesh: {} triangles, {} floats in the vertex buffer",
        mesh.num_triangles(),
        mesh.vertex_buffer().len()
    );

    let mut ply = to_ply(&mesh);
    let mut file = File::create("sphere.ply")?;
    let written = Writer::new().write_ply(&mut file, &mut ply)?;
    println!(
        "wrote sphere.ply ({} triangles, {written} bytes)",
        mesh.num_triangles()
    );
    Ok(())
}

/// Converts the triangle soup into an ASCII PLY document (positions plus
/// per-triangle vertex indices; no normals).
fn to_ply(mesh: &IsoMesh) -> Ply<DefaultElement> {
    let mut ply = Ply::<DefaultElement>::new();
    ply.header.encoding = Encoding::Ascii;

    let mut vertex_def = ElementDef::new("vertex".to_string());
    for name in ["x", "y", "z"] {
        vertex_def.properties.add(PropertyDef::new(
            name.to_string(),
            PropertyType::Scalar(ScalarType::Float),
        ));
    }
    ply.header.elements.add(vertex_def);

    let mut face_def = ElementDef::new("face".to_string());
    face_def.properties.add(PropertyDef::new(
        "vertex_indices".to_string(),
        PropertyType::List(ScalarType::UChar, ScalarType::Int),
    ));
    ply.header.elements.add(face_def);

    let mut vertices = Vec::new();
    let mut faces = Vec::new();
    for (i, tri) in mesh.triangles.iter().enumerate() {
        for p in &tri.corners {
            let mut vertex = DefaultElement::new();
            vertex.insert("x".to_string(), Property::Float(p.x));
            vertex.insert("y".to_string(), Property::Float(p.y));
            vertex.insert("z".to_string(), Property::Float(p.z));
            vertices.push(vertex);
        }
        let base = (i * 3) as i32;
        let mut face = DefaultElement::new();
        face.insert(
            "vertex_indices".to_string(),
            Property::ListInt(vec![base, base + 1, base + 2]),
        );
        faces.push(face);
    }
    ply.payload.insert("vertex".to_string(), vertices);
    ply.payload.insert("face".to_string(), faces);
    ply.make_consistent().unwrap();
    ply
}
