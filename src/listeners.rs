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

use crate::recognizer::ClassifyResult;
use std::collections::HashMap;
use std::fmt;

type Callback = Box<dyn FnMut(f32)>;

/// Callbacks keyed by template name, fed with the score of every match on that name.
#[derive(Default)]
pub struct Listeners {
    callbacks: HashMap<String, Vec<Callback>>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a callback for matches on the template `name`
    pub fn on<F>(&mut self, name: &str, callback: F)
    where
        F: FnMut(f32) + 'static,
    {
        self.callbacks
            .entry(name.to_owned())
            .or_default()
            .push(Box::new(callback));
    }

    /// Calls, in registration order, every callback registered for the matched template.
    /// Returns how many callbacks ran; results other than a match run none.
    pub fn dispatch(&mut self, result: &ClassifyResult) -> usize {
        let Some((name, score)) = result.matched() else {
            return 0;
        };
        match self.callbacks.get_mut(name) {
            Some(callbacks) => {
                for callback in callbacks.iter_mut() {
                    callback(score);
                }
                callbacks.len()
            }
            None => 0,
        }
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.callbacks.iter().map(|(name, c)| (name, c.len())))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn matched(name: &str, score: f32) -> ClassifyResult {
        ClassifyResult::Match {
            name: name.into(),
            score,
            distance: 2.0 - 2.0 * score,
        }
    }

    #[test]
    fn dispatches_to_callbacks_of_the_matched_name() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut listeners = Listeners::new();
        for tag in ["a", "b"] {
            let seen = seen.clone();
            listeners.on("circle", move |score| seen.borrow_mut().push((tag, score)));
        }
        let other = seen.clone();
        listeners.on("line", move |score| other.borrow_mut().push(("line", score)));

        assert_eq!(listeners.dispatch(&matched("circle", 0.75)), 2);
        assert_eq!(*seen.borrow(), vec![("a", 0.75), ("b", 0.75)]);
    }

    #[test]
    fn non_matches_dispatch_nothing() {
        let calls = Rc::new(RefCell::new(0));
        let mut listeners = Listeners::new();
        let counter = calls.clone();
        listeners.on("circle", move |_| *counter.borrow_mut() += 1);

        assert_eq!(listeners.dispatch(&ClassifyResult::NoConfidentMatch), 0);
        assert_eq!(listeners.dispatch(&ClassifyResult::NoTemplates), 0);
        assert_eq!(listeners.dispatch(&ClassifyResult::InsufficientInput), 0);
        assert_eq!(listeners.dispatch(&matched("square", 0.9)), 0);
        assert_eq!(*calls.borrow(), 0);
    }
}
