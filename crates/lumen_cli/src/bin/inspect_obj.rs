// Quick debug tool to inspect OBJ mesh data and its winding
// Run with: cargo run --release --bin inspect_obj -- <path_to.obj>

use lumen_core::load_obj;
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <path_to.obj>", args[0]);
        std::process::exit(1);
    }

    let path = &args[1];
    println!("Loading OBJ: {}", path);

    let mesh = load_obj(path)?;

    println!("Vertices: {}", mesh.vertex_count());
    println!("Triangles: {}", mesh.triangle_count());
    println!(
        "Bounds: ({:.3}, {:.3}, {:.3}) .. ({:.3}, {:.3}, {:.3})",
        mesh.bounds.x.min,
        mesh.bounds.y.min,
        mesh.bounds.z.min,
        mesh.bounds.x.max,
        mesh.bounds.y.max,
        mesh.bounds.z.max
    );

    let degenerate = mesh.normals.iter().filter(|n| n.length_squared() == 0.0).count();
    if degenerate > 0 {
        println!("Degenerate triangles: {}", degenerate);
    }

    // Show the first few triangles with their winding normal
    let num_tris = mesh.triangle_count().min(8);
    println!("\nFirst {} triangles:", num_tris);

    for (tri_idx, [v0, v1, v2]) in mesh.triangles().take(num_tris).enumerate() {
        let n = mesh.normals[tri_idx];
        let centroid = (v0 + v1 + v2) / 3.0;

        println!("\n  Triangle {}", tri_idx);
        println!("    v0: ({:.3}, {:.3}, {:.3})", v0.x, v0.y, v0.z);
        println!("    v1: ({:.3}, {:.3}, {:.3})", v1.x, v1.y, v1.z);
        println!("    v2: ({:.3}, {:.3}, {:.3})", v2.x, v2.y, v2.z);
        println!("    normal: ({:.3}, {:.3}, {:.3})", n.x, n.y, n.z);

        // For a closed mesh around the origin, outward faces point away from it
        let facing = if n.dot(centroid) >= 0.0 { "outward" } else { "inward" };
        println!("    faces {} relative to the origin", facing);
    }

    Ok(())
}
