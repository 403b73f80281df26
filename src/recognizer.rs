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

use crate::{
    cloud_matcher::greedy_cloud_match,
    error::PointCloudError,
    point_cloud::{PointCloud, Stroke},
};
use log::{debug, trace};
#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};

/// Distance at which the score reaches zero. Calibrated for clouds scaled into a unit box.
pub const SCORE_DISTANCE_SCALE: f32 = 2.0;

/// Outcome of classifying a gesture against the template gallery.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ClassifyResult {
    /// The closest template, its score in (0..1] and the raw cloud distance
    Match { name: String, score: f32, distance: f32 },
    /// The closest template is too far away to be worth reporting
    NoConfidentMatch,
    /// The gallery is empty
    NoTemplates,
    /// Not enough samples to build a point cloud
    InsufficientInput,
}

impl ClassifyResult {
    /// Name and score of a successful match
    pub fn matched(&self) -> Option<(&str, f32)> {
        match self {
            Self::Match { name, score, .. } => Some((name, *score)),
            _ => None,
        }
    }
}

/// Tunables for the recognizer. Nothing is tunable yet: the sampling resolution and
/// the number of greedy search trials are fixed so that scores stay comparable.
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct RecognizerOptions {}

/// The $P recognizer: a gallery of named templates and the classifier running over it.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "StoredGallery"))]
pub struct Recognizer {
    templates: Vec<PointCloud>,
}

/// Deserialized gallery; every template must use the recognizer's resolution
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct StoredGallery {
    templates: Vec<PointCloud>,
}

#[cfg(feature = "serde")]
impl TryFrom<StoredGallery> for Recognizer {
    type Error = PointCloudError;

    fn try_from(stored: StoredGallery) -> Result<Self, Self::Error> {
        use crate::point_cloud::SAMPLING_RESOLUTION;
        if let Some(t) = stored
            .templates
            .iter()
            .find(|t| t.resolution != SAMPLING_RESOLUTION)
        {
            return Err(PointCloudError::MalformedCloud {
                resolution: SAMPLING_RESOLUTION,
                points: t.points.len(),
            });
        }
        Ok(Self {
            templates: stored.templates,
        })
    }
}

impl Recognizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies configuration options. Currently has no effect.
    pub fn config(&mut self, options: RecognizerOptions) {
        debug!("ignoring recognizer options {:?}, nothing is configurable", options);
    }

    /// Adds a template to the gallery. Templates sharing a name are kept side by side.
    pub fn add_template(&mut self, name: &str, strokes: &[Stroke]) -> Result<(), PointCloudError> {
        let cloud = PointCloud::new(name, strokes)?;
        debug!(
            "added template '{}' ({} strokes), gallery size {}",
            name,
            strokes.len(),
            self.templates.len() + 1
        );
        self.templates.push(cloud);
        Ok(())
    }

    /// Main function of the $P recognizer.
    /// Classifies a candidate gesture against the template gallery and reports the closest one.
    /// Non-finite coordinates are rejected with [`PointCloudError::InvalidInput`].
    pub fn classify(&self, strokes: &[Stroke]) -> Result<ClassifyResult, PointCloudError> {
        let candidate = match PointCloud::new("candidate", strokes) {
            Ok(cloud) => cloud,
            Err(e) if e.is_insufficient_input() => {
                debug!("not classifying: {}", e);
                return Ok(ClassifyResult::InsufficientInput);
            }
            Err(e) => return Err(e),
        };

        let mut best: Option<(&PointCloud, f32)> = None;
        for template in &self.templates {
            let dist = greedy_cloud_match(&candidate, template);
            trace!("distance to '{}': {}", template.name, dist);
            // strict comparison: on ties the earliest template wins
            if best.map_or(true, |(_, min_distance)| dist < min_distance) {
                best = Some((template, dist));
            }
        }

        let Some((template, distance)) = best else {
            debug!("no templates to classify against");
            return Ok(ClassifyResult::NoTemplates);
        };

        let score = score_from_distance(distance);
        if score <= 0.0 {
            debug!("closest template '{}' is too far ({})", template.name, distance);
            return Ok(ClassifyResult::NoConfidentMatch);
        }
        debug!("matched '{}' with score {}", template.name, score);
        Ok(ClassifyResult::Match {
            name: template.name.clone(),
            score,
            distance,
        })
    }

    /// Templates in registration order
    pub fn templates(&self) -> &[PointCloud] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Removes every template
    pub fn clear(&mut self) {
        self.templates.clear();
    }
}

/// Maps a cloud distance linearly onto a score: 0 gives 1.0, [`SCORE_DISTANCE_SCALE`] or more gives 0.0
pub fn score_from_distance(distance: f32) -> f32 {
    ((distance - SCORE_DISTANCE_SCALE) / -SCORE_DISTANCE_SCALE).max(0.0)
}
