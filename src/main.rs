use closest_approach::*;

fn coordinates(wp: &WayPoint) -> String {
    let p: Vec<String> = wp
        .coordinates()
        .iter()
        .map(|c| format!("{:4.1}", c))
        .collect();
    format!("({})", p.join(","))
}

fn main() {
    println!("TWO ROUTES:");
    let route1 = Route::new(vec![
        WayPoint::new(0, vec![0f64, 0f64]),
        WayPoint::new(10, vec![2f64, 2f64]),
        WayPoint::new(20, vec![4f64, 2f64]),
        WayPoint::new(60, vec![0f64, 0f64]),
    ]);
    let route2 = Route::new(vec![
        WayPoint::new(0, vec![2f64, 8f64]),
        WayPoint::new(20, vec![0f64, 6f64]),
        WayPoint::new(40, vec![4f64, 2f64]),
    ]);

    let dca = RouteClosestApproach::new(route1, route2);
    println!("Aligned times  : {:?}", dca.aligned_times());
    let aligned1: Vec<String> = dca.aligned_route1().iter().map(coordinates).collect();
    println!("Aligned route 1: {}", aligned1.join(" "));
    let aligned2: Vec<String> = dca.aligned_route2().iter().map(coordinates).collect();
    println!("Aligned route 2: {}", aligned2.join(" "));

    println!(
        "{:>4} {:>4} {:>12} {:>12} {:>12} {:>12} {:>8} {:>4} {:>12} {:>12} {:>8}",
        "ts", "te", "s1", "e1", "s2", "e2", "k", "t", "p1", "p2", "d"
    );
    let times = dca.aligned_times();
    for i in 0..times.len() - 1 {
        let s1 = &dca.aligned_route1()[i];
        let e1 = &dca.aligned_route1()[i + 1];
        let s2 = &dca.aligned_route2()[i];
        let e2 = &dca.aligned_route2()[i + 1];
        let ca = SegmentClosestApproach::new(s1.clone(), e1.clone(), s2.clone(), e2.clone());
        let (time, p1, p2) = match ca.closest_approach().way_points() {
            Some((wp1, wp2)) => (
                format!("{}", wp1.time()),
                coordinates(wp1),
                coordinates(wp2),
            ),
            None => ("-".to_string(), "-".to_string(), "-".to_string()),
        };
        println!(
            "{:>4} {:>4} {:>12} {:>12} {:>12} {:>12} {:>8.3} {:>4} {:>12} {:>12} {:>8.3}",
            s1.time(),
            e1.time(),
            coordinates(s1),
            coordinates(e1),
            coordinates(s2),
            coordinates(e2),
            ca.closest_k(),
            time,
            p1,
            p2,
            ca.closest_approach().distance(),
        );
    }
    for ca in dca.closest_approaches() {
        println!("Closest: {}", ca);
    }

    println!();
    println!("CROSSING ROUTES:");
    let route1 = Route::new(vec![
        WayPoint::new(0, vec![0f64, 0f64]),
        WayPoint::new(10, vec![0f64, 10f64]),
        WayPoint::new(20, vec![10f64, 10f64]),
        WayPoint::new(30, vec![10f64, 0f64]),
        WayPoint::new(40, vec![0f64, 0f64]),
    ]);
    let route2 = Route::new(vec![
        WayPoint::new(20, vec![5f64, 5f64]),
        WayPoint::new(30, vec![15f64, 5f64]),
    ]);
    let dca = RouteClosestApproach::new(route1, route2);
    println!("Aligned times  : {:?}", dca.aligned_times());
    for ca in dca.closest_approaches() {
        println!("Closest: {}", ca);
    }
}
