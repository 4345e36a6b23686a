use bowyer_watson::*;

fn main() {
    let points: Vec<Point> = vec![
        (0.0, 0.0).into(),
        (1.0, 0.0).into(),
        (1.0, 1.0).into(),
        (0.0, 1.0).into(),
        (0.3, 0.6).into(),
    ];

    match triangulate(&points) {
        Ok(delaunay) => {
            for t in delaunay.triangles() {
                println!("{:?}", t.vertices());
            }
        }
        Err(err) => eprintln!("triangulation failed: {err}"),
    }
}
