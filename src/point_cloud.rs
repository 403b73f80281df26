/*
 * The $P Point-Cloud Recognizer (rust version)
 * 
 * Original authors:
 * 
 * 	    Radu-Daniel Vatavu, Ph.D.
 *	    University Stefan cel Mare of Suceava
 *	    Suceava 720229, Romania
 *	    vatavu@eed.usv.ro
 *
 *	    Lisa Anthony, Ph.D.
 *      UMBC
 *      Information Systems Department
 *      1000 Hilltop Circle
 *      Baltimore, MD 21250
 *      lanthony@umbc.edu
 *
 *	    Jacob O. Wobbrock, Ph.D.
 * 	    The Information School
 *	    University of Washington
 *	    Seattle, WA 98195-2840
 *	    wobbrock@uw.edu
 *
 * The academic publication for the $P recognizer, and what should be 
 * used to cite it, is:
 *
 *	Vatavu, R.-D., Anthony, L. and Wobbrock, J.O. (2012).  
 *	  Gestures as point clouds: A $P recognizer for user interface 
 *	  prototypes. Proceedings of the ACM Int'l Conference on  
 *	  Multimodal Interfaces (ICMI '12). Santa Monica, California  
 *	  (October 22-26, 2012). New York: ACM Press, pp. 273-280.
 *
 * This software is distributed under the "New BSD License" agreement:
 *
 * Copyright (c) 2012, Radu-Daniel Vatavu, Lisa Anthony, and 
 * Jacob O. Wobbrock. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without
 * modification, are permitted provided that the following conditions are met:
 *    * Redistributions of source code must retain the above copyright
 *      notice, this list of conditions and the following disclaimer.
 *    * Redistributions in binary form must reproduce the above copyright
 *      notice, this list of conditions and the following disclaimer in the
 *      documentation and/or other materials provided with the distribution.
 *    * Neither the names of the University Stefan cel Mare of Suceava, 
 *	    University of Washington, nor UMBC, nor the names of its contributors 
 *	    may be used to endorse or promote products derived from this software 
 *	    without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS
 * IS" AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO,
 * THE IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR
 * PURPOSE ARE DISCLAIMED. IN NO EVENT SHALL Radu-Daniel Vatavu OR Lisa Anthony
 * OR Jacob O. Wobbrock BE LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, 
 * EXEMPLARY, OR CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT 
 * OF SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS 
 * INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, 
 * STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY
 * OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF
 * SUCH DAMAGE.
**/

use crate::{error::PointCloudError, geometry, point::Point};
use log::debug;
#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};

/// Default number of points on the gesture path
pub const SAMPLING_RESOLUTION: usize = 32;

/// One continuous pointer drag as raw `(x, y)` samples, in chronological order.
pub type Stroke = Vec<(f32, f32)>;

/// Implements a gesture as a cloud of points (i.e., an unordered set of points).
/// Gestures are resampled into a fixed number of points, normalized with respect
/// to scale and translated to the origin.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "StoredPointCloud"))]
pub struct PointCloud {
    /// Gesture class
    pub name: String,
    /// Number of points the gesture is resampled to
    pub resolution: usize,
    /// Gesture points (normalized)
    pub points: Vec<Point>,
    /// Raw strokes the cloud was built from
    original_strokes: Vec<Stroke>,
}

/// Deserialized form of a [`PointCloud`], checked before it is accepted
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct StoredPointCloud {
    name: String,
    resolution: usize,
    points: Vec<Point>,
    original_strokes: Vec<Stroke>,
}

#[cfg(feature = "serde")]
impl TryFrom<StoredPointCloud> for PointCloud {
    type Error = PointCloudError;

    fn try_from(stored: StoredPointCloud) -> Result<Self, Self::Error> {
        if stored.resolution < 2 {
            return Err(PointCloudError::InvalidResolution(stored.resolution));
        }
        if stored.points.len() != stored.resolution || !stored.points.iter().all(Point::is_finite) {
            return Err(PointCloudError::MalformedCloud {
                resolution: stored.resolution,
                points: stored.points.len(),
            });
        }
        Ok(Self {
            name: stored.name,
            resolution: stored.resolution,
            points: stored.points,
            original_strokes: stored.original_strokes,
        })
    }
}

impl PointCloud {
    /// Builds a normalized cloud of [`SAMPLING_RESOLUTION`] points from raw strokes.
    pub fn new(name: &str, strokes: &[Stroke]) -> Result<Self, PointCloudError> {
        Self::with_resolution(name, strokes, SAMPLING_RESOLUTION)
    }

    /// Builds a normalized cloud of `resolution` points from raw strokes.
    pub fn with_resolution(
        name: &str,
        strokes: &[Stroke],
        resolution: usize,
    ) -> Result<Self, PointCloudError> {
        if resolution < 2 {
            return Err(PointCloudError::InvalidResolution(resolution));
        }
        let points = Self::flatten(strokes)?;
        let (min, max) = geometry::bounding_box(&points);
        let extent = (max.x - min.x).max(max.y - min.y);
        if !extent.is_finite() || !geometry::path_length(&points).is_finite() {
            return Err(PointCloudError::ExtentOverflow);
        }
        let mut cloud = Self {
            name: name.into(),
            resolution,
            points,
            original_strokes: strokes.to_vec(),
        };
        cloud.normalize();
        Ok(cloud)
    }

    /// The raw strokes this cloud was built from, untouched by normalization
    pub fn original_strokes(&self) -> &[Stroke] {
        &self.original_strokes
    }

    /// Concatenates all strokes, tagging every point with the index of its stroke.
    fn flatten(strokes: &[Stroke]) -> Result<Vec<Point>, PointCloudError> {
        if strokes.is_empty() {
            return Err(PointCloudError::EmptyStrokeList);
        }
        let mut points = Vec::with_capacity(strokes.iter().map(Vec::len).sum());
        for (stroke, samples) in strokes.iter().enumerate() {
            if samples.len() < 2 {
                return Err(PointCloudError::InsufficientInput {
                    stroke,
                    samples: samples.len(),
                });
            }
            for (sample, &(x, y)) in samples.iter().enumerate() {
                let p = Point::new(x, y, stroke as i32);
                if !p.is_finite() {
                    return Err(PointCloudError::InvalidInput { stroke, sample });
                }
                points.push(p);
            }
        }
        Ok(points)
    }

    /// Normalizes the gesture path: resample, scale, and translate to origin
    fn normalize(&mut self) {
        self.points = Self::resample(&self.points, self.resolution);
        self.points = Self::scale(&self.points);
        self.points = Self::translate_to(&self.points, &Point::new(0.0, 0.0, 0));
    }

    /// Resamples the array of points into n points equally spaced along each stroke
    fn resample(points: &[Point], n: usize) -> Vec<Point> {
        let first = points[0];
        let interval = geometry::path_length(points) / (n as f32 - 1.0);
        if interval == 0.0 {
            // a tap: every sample sits on the same spot
            debug!("zero-length path of {} samples, collapsing to one point", points.len());
            return vec![first; n];
        }

        let mut new_points = Vec::with_capacity(n);
        new_points.push(first);
        let mut d = 0.0;
        let mut prev = first;

        'walk: for &current in &points[1..] {
            if current.same_stroke(&prev) {
                loop {
                    let dist = prev.distance_to(&current);
                    if d + dist < interval {
                        d += dist;
                        break;
                    }
                    if new_points.len() == n {
                        break 'walk;
                    }
                    let t = (interval - d) / dist;
                    let q = Point::new(
                        prev.x + t * (current.x - prev.x),
                        prev.y + t * (current.y - prev.y),
                        current.stroke_id,
                    );
                    new_points.push(q);
                    // the rest of the segment, from q onwards, is measured again
                    prev = q;
                    d = 0.0;
                }
            }
            prev = current;
        }

        // sometimes we fall a rounding-error short of adding the last point, so add it if so
        let last = points[points.len() - 1];
        while new_points.len() < n {
            new_points.push(last);
        }
        new_points
    }

    /// Performs scale normalization with shape preservation into [0..1]x[0..1]
    fn scale(points: &[Point]) -> Vec<Point> {
        let (min, max) = geometry::bounding_box(points);
        let size = (max.x - min.x).max(max.y - min.y);
        if size == 0.0 {
            return points
                .iter()
                .map(|p| Point::new(0.0, 0.0, p.stroke_id))
                .collect();
        }
        points
            .iter()
            .map(|p| Point::new((p.x - min.x) / size, (p.y - min.y) / size, p.stroke_id))
            .collect()
    }

    /// Translates the array of points so that their centroid lands on `origin`
    fn translate_to(points: &[Point], origin: &Point) -> Vec<Point> {
        let c = geometry::centroid(points);
        points
            .iter()
            .map(|p| Point::new(p.x + origin.x - c.x, p.y + origin.y - c.y, p.stroke_id))
            .collect()
    }
}
