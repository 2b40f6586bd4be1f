/// This example is like a visual debugger, it can draw each step
use clap::Parser;
use sweep_cdt::{
    loader::{Loader, PlainFileLoader},
    Context, EdgeId, Observer, TriangleId, VertexId,
};
use utils::draw_svg;
mod utils;

/// Triangulate a point file, draw the result or every sweep step
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Point file, `x y` per line, then an optional `CONSTRAINTS` section
    #[arg(short, long)]
    path: std::path::PathBuf,

    /// Draw only the result to this svg file
    #[arg(short, long)]
    output: Option<std::path::PathBuf>,

    /// Directory the step frames are written to
    #[arg(long, default_value = "frames")]
    frames_dir: std::path::PathBuf,

    /// Draw a frame for each swept vertex
    #[arg(long)]
    point: bool,

    /// Draw a frame for each flipped edge
    #[arg(long)]
    flip: bool,

    /// Label vertices with their input index
    #[arg(long, default_value = "false")]
    debug: bool,

    #[arg(long, default_value = "1")]
    bench_count: usize,

    #[arg(long, default_value = "1000")]
    frame_count: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let builder = {
        let mut file_loader = PlainFileLoader::default();
        let path = args.path.to_str().ok_or("path is not valid utf-8")?;
        file_loader.load(path)?
    };

    if let Some(output_path) = args.output {
        // draw result instead of debug
        let triangulation = builder.build()?.triangulate()?;
        draw_svg(&triangulation, output_path);
        return Ok(());
    }

    if args.bench_count == 1 {
        let mut observer = DrawObserver::new(&args);
        let result = builder
            .clone()
            .build()?
            .triangulate_with_observer(&mut observer);
        observer.save(&args.frames_dir)?;
        let triangulation = result?;
        println!(
            "{} triangles, {} frames written to {}",
            triangulation.triangles().len(),
            observer.frames.len(),
            args.frames_dir.display()
        );

        // measure time with dummy observer
        let start = std::time::Instant::now();
        let count = 1000;
        for _ in 0..count {
            let _ = builder.clone().build()?.triangulate();
        }
        let end = std::time::Instant::now();
        let duration = end.duration_since(start) / count;
        println!("{:?} per triangulation", duration);
    } else {
        for _ in 0..args.bench_count {
            let _ = builder.clone().build()?.triangulate();
        }
    }

    Ok(())
}

struct DrawObserver {
    messages: Vec<String>,
    debug: bool,
    point: bool,
    flip: bool,

    frame_count: usize,

    // whether all process done
    finalized: bool,

    legalize_count: u64,
    point_count: u64,
    constrained_count: u64,
    flip_count: u64,

    /// svgs
    frames: Vec<String>,
    frame_messages: Vec<Vec<String>>,
}

impl DrawObserver {
    fn new(args: &Args) -> Self {
        Self {
            debug: args.debug,
            point: args.point,
            flip: args.flip,
            messages: Default::default(),
            finalized: false,
            frames: vec![],
            frame_messages: vec![],
            legalize_count: 0,
            point_count: 0,
            constrained_count: 0,
            flip_count: 0,
            frame_count: args.frame_count,
        }
    }

    fn save(&self, dir: &std::path::Path) -> std::io::Result<()> {
        std::fs::create_dir_all(dir)?;
        for (idx, frame) in self.frames.iter().enumerate() {
            std::fs::write(dir.join(format!("frame_{idx:04}.svg")), frame)?;
        }

        let mut log = format!(
            "points: {} constrained: {} legalize: {} flips: {}\n",
            self.point_count, self.constrained_count, self.legalize_count, self.flip_count
        );
        for (idx, messages) in self.frame_messages.iter().enumerate() {
            for message in messages {
                log.push_str(&format!("{idx:04} {message}\n"));
            }
        }
        std::fs::write(dir.join("messages.txt"), log)
    }
}

impl Observer for DrawObserver {
    fn exit_step(&mut self, vertex: VertexId, context: &Context) {
        self.point_count += 1;
        if !self.point {
            return;
        }
        let point = context.point(vertex);
        self.messages
            .push(format!("vertex {}: {point:?}", context.index(vertex)));
        self.draw(context);
    }

    fn edge_constrained(&mut self, edge: EdgeId, context: &Context) {
        self.constrained_count += 1;
        let [a, b] = edge.get(&context.edges).vertices;
        self.messages.push(format!(
            "constrained: {} {}",
            context.index(a),
            context.index(b)
        ));
    }

    fn will_legalize(&mut self, _edge: EdgeId, _context: &Context) {
        self.legalize_count += 1;
    }

    fn edge_flipped(&mut self, _old: EdgeId, new: EdgeId, context: &Context) {
        self.flip_count += 1;
        if !self.flip {
            return;
        }
        let [a, b] = new.get(&context.edges).vertices;
        self.messages
            .push(format!("flipped to {} {}", context.index(a), context.index(b)));
        self.draw(context);
    }

    fn front_filled(&mut self, _triangle: TriangleId, _context: &Context) {}

    fn sweep_done(&mut self, context: &Context) {
        self.messages.push("sweep done".into());
        self.draw(context);
    }

    fn finalized(&mut self, context: &Context) {
        self.messages.push("finalized".into());
        self.finalized = true;
        self.draw(context);
    }
}

impl DrawObserver {
    fn draw(&mut self, context: &Context) {
        if self.frames.len() >= self.frame_count {
            return;
        }

        use svg::Document;
        use svg::Node;

        #[derive(Debug, Clone, Copy)]
        struct MapRect {
            x: f64,
            y: f64,
            w: f64,
            h: f64,
        }

        // map rect with y flipped, svg's coordinate with origin at left-top
        #[derive(Debug)]
        struct Map {
            from: MapRect,
            to: MapRect,
        }

        impl Map {
            fn map_point(&self, x: f64, y: f64) -> (f64, f64) {
                let x = (x - self.from.x) / self.from.w * self.to.w + self.to.x;
                let y = self.to.h - (y - self.from.y) / self.from.h * self.to.h + self.to.y;
                (x, y)
            }
        }

        // synthetic vertices included while sweeping
        let mut min_x = f64::MAX;
        let mut max_x = f64::MIN;
        let mut min_y = f64::MAX;
        let mut max_y = f64::MIN;
        for (_, t) in context.triangles.iter() {
            for v in t.vertices {
                let p = context.point(v);
                min_x = min_x.min(p.x);
                max_x = max_x.max(p.x);
                min_y = min_y.min(p.y);
                max_y = max_y.max(p.y);
            }
        }
        if min_x > max_x {
            return;
        }

        let w = max_x - min_x;
        let space = w * 0.05; // give some space

        let from = MapRect {
            x: min_x - space,
            y: min_y - space,
            w: max_x - min_x + 2. * space,
            h: max_y - min_y + 2. * space,
        };

        let to = MapRect {
            x: 0.,
            y: 0.,
            w: 800.,
            h: 800. * from.h / from.w,
        };
        let map = Map { from, to };
        let map_vertex = |v: VertexId| {
            let p = context.point(v);
            map.map_point(p.x, p.y)
        };

        let mut doc = Document::new()
            .set("viewBox", (to.x, to.y, to.w, to.h))
            .set("style", "background-color: #F5F5F5");

        for (_, t) in context.triangles.iter() {
            let [p0, p1, p2] = t.vertices.map(map_vertex);
            let synthetic = t.vertices.iter().any(|v| context.is_synthetic(*v));
            let fill = if synthetic { "clear" } else { "blue" };
            doc.append(triangle(p0, p1, p2, "white", fill));
        }

        for (_, e) in context.edges.iter() {
            if e.constrained {
                let [p, q] = e.vertices.map(map_vertex);
                doc.append(line(p, q, "yellow"));
            }
        }

        if !self.finalized {
            for e in context.front.iter(&context.edges) {
                let [p, q] = e.get(&context.edges).vertices.map(map_vertex);
                doc.append(line(p, q, "red"));
            }
        }

        if self.debug {
            let point_r = 2.;
            for (_, t) in context.triangles.iter() {
                for v in t.vertices {
                    let c = map_vertex(v);
                    doc.append(circle(c, point_r, "red", "red"));
                    doc.append(text(format!("{}", context.index(v)), c));
                }
            }
        }

        self.frames.push(doc.to_string());
        self.frame_messages.push(std::mem::take(&mut self.messages));
    }
}

fn line(p: (f64, f64), q: (f64, f64), color: &str) -> svg::node::element::Line {
    svg::node::element::Line::new()
        .set("class", "edge")
        .set("stroke", to_color(color))
        .set("x1", p.0)
        .set("y1", p.1)
        .set("x2", q.0)
        .set("y2", q.1)
}

fn text(content: impl Into<String>, p: (f64, f64)) -> svg::node::element::Text {
    svg::node::element::Text::new()
        .add(svg::node::Text::new(content))
        .set("x", p.0)
        .set("y", p.1)
}

fn triangle(
    p0: (f64, f64),
    p1: (f64, f64),
    p2: (f64, f64),
    border_color: &str,
    fill_color: &str,
) -> svg::node::element::Path {
    let data = svg::node::element::path::Data::new()
        .move_to(p0)
        .line_to(p1)
        .line_to(p2)
        .close();

    svg::node::element::Path::new()
        .set("d", data)
        .set("stroke", to_color(border_color))
        .set("fill", to_color(fill_color))
}

fn circle(c: (f64, f64), r: f64, stroke_color: &str, fill_color: &str) -> svg::node::element::Circle {
    svg::node::element::Circle::new()
        .set("cx", c.0)
        .set("cy", c.1)
        .set("r", r)
        .set("stroke", to_color(stroke_color))
        .set("stroke-width", 1)
        .set("fill", to_color(fill_color))
}

fn to_color(name: &str) -> String {
    match name {
        "blue" => "#29B6F6",
        "yellow" => "#FFA726",
        "red" => "#EF5350",
        "black" => "#3E2723",
        "gray" => "#616161",
        "clear" => "#00000000",
        _ => name,
    }
    .into()
}
