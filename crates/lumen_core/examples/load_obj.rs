//! Example: Load and inspect an OBJ file.
//!
//! Run with: cargo run --example load_obj -- Resources/simple_cube.obj

use std::env;

use lumen_core::load_obj;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: load_obj <path-to-obj-file>");
        return;
    }

    let path = &args[1];
    println!("Loading OBJ file: {}", path);

    match load_obj(path) {
        Ok(mesh) => {
            println!("\n=== Mesh ===");
            println!("Vertices: {}", mesh.vertex_count());
            println!("Triangles: {}", mesh.triangle_count());
            println!("Bounds min: {:?}", mesh.bounds.min_point());
            println!("Bounds max: {:?}", mesh.bounds.max_point());
        }
        Err(e) => {
            eprintln!("Error loading OBJ: {}", e);
            std::process::exit(1);
        }
    }
}
