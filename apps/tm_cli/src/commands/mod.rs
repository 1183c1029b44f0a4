// terramask\apps\tm_cli\src\commands\mod.rs

//! 子命令实现与共享的几何文件加载

pub mod info;
pub mod rasterize;

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tm_geo::{MultiPolygon, Point2D, Polygon, Ring};

/// 几何文件的 JSON 形式（GeoJSON 风格的坐标数组）
#[derive(Deserialize)]
#[serde(tag = "type")]
enum GeometryFile {
    Polygon {
        coordinates: Vec<Vec<[f64; 2]>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<[f64; 2]>>>,
    },
}

/// 从 JSON 文件加载几何，统一为多部分多边形
pub fn load_geometry(path: &Path) -> Result<MultiPolygon> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("读取几何文件失败: {}", path.display()))?;
    let parsed: GeometryFile = serde_json::from_str(&text).context("解析几何 JSON 失败")?;

    let multi = match parsed {
        GeometryFile::Polygon { coordinates } => {
            MultiPolygon::new(vec![build_polygon(coordinates)?])?
        }
        GeometryFile::MultiPolygon { coordinates } => {
            let parts = coordinates
                .into_iter()
                .map(build_polygon)
                .collect::<Result<Vec<_>>>()?;
            MultiPolygon::new(parts)?
        }
    };
    Ok(multi)
}

fn build_polygon(rings: Vec<Vec<[f64; 2]>>) -> Result<Polygon> {
    let mut iter = rings.into_iter();
    let exterior = build_ring(iter.next().context("多边形缺少外环")?)?;
    let holes = iter.map(build_ring).collect::<Result<Vec<_>>>()?;
    Ok(Polygon::new(exterior, holes))
}

fn build_ring(coords: Vec<[f64; 2]>) -> Result<Ring> {
    let vertices: Vec<Point2D> = coords.into_iter().map(Point2D::from).collect();
    Ring::new(vertices).context("构造多边形环失败")
}
