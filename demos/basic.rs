use bowyer_watson::*;
use rand::Rng;

fn main() {
    let mut rng = rand::thread_rng();

    let points: Vec<Point> = (0..100)
        .map(|_| Point::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
        .collect();

    let config = TriangulationConfig::default().with_reject_insufficient_input(true);
    let delaunay = Triangulator::new(config)
        .triangulate(&points)
        .expect("compute triangulation");

    println!("{} points, {} triangles", delaunay.points().len(), delaunay.len());
    for t in delaunay.triangles() {
        println!("{:?}", t.vertices());
    }
}
