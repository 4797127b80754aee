// Copyright 2026 the Lenticular Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Image preloading for canvas scenes.
//!
//! [`ImageLoader`] creates one [`HtmlImageElement`] per asset URL, counts
//! `load` events through a [`ReadyLatch`], and invokes a ready callback
//! exactly once when the final asset arrives. Compositing must not start
//! before then, so the caller builds its presenter inside the callback.
//!
//! There is no error path: an asset that fails to fetch never completes
//! the latch and the scene never starts.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::HtmlImageElement;

use lenticular_core::ready::ReadyLatch;

type ReadyCallback = Box<dyn FnOnce(&[HtmlImageElement])>;

/// Preloads a set of images and fires a callback when all have arrived.
///
/// The loader owns the image elements and their `load` handlers; dropping
/// it detaches the handlers, though the browser may keep fetching.
pub struct ImageLoader {
    images: Rc<Vec<HtmlImageElement>>,
    latch: Rc<RefCell<ReadyLatch>>,
    onloads: Vec<Closure<dyn FnMut()>>,
}

impl core::fmt::Debug for ImageLoader {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ImageLoader")
            .field("images_len", &self.images.len())
            .field("remaining", &self.latch.borrow().remaining())
            .finish()
    }
}

impl ImageLoader {
    /// Starts fetching `urls` and arranges for `on_ready` to run once all
    /// of them have loaded.
    ///
    /// Image order follows `urls`, so index `i` of the callback's slice is
    /// the element for `urls[i]`. An empty list is ready immediately and
    /// the callback runs before this returns.
    ///
    /// # Errors
    ///
    /// Fails if an image element cannot be created.
    pub fn start(
        urls: &[&str],
        on_ready: impl FnOnce(&[HtmlImageElement]) + 'static,
    ) -> Result<Self, JsValue> {
        let expected = u32::try_from(urls.len())
            .map_err(|_| JsValue::from_str("too many assets for one latch"))?;
        let latch = Rc::new(RefCell::new(ReadyLatch::new(expected)));
        let ready: Rc<RefCell<Option<ReadyCallback>>> =
            Rc::new(RefCell::new(Some(Box::new(on_ready))));

        let mut elements = Vec::with_capacity(urls.len());
        for _ in urls {
            elements.push(HtmlImageElement::new()?);
        }
        let images = Rc::new(elements);

        if latch.borrow().is_ready() {
            if let Some(callback) = ready.borrow_mut().take() {
                callback(&images);
            }
            return Ok(Self {
                images,
                latch,
                onloads: Vec::new(),
            });
        }

        // Handlers are attached before the src assignment starts the
        // fetch, so a cache hit cannot slip past the latch.
        let mut onloads = Vec::with_capacity(urls.len());
        for (image, url) in images.iter().zip(urls) {
            let latch = Rc::clone(&latch);
            let ready = Rc::clone(&ready);
            let all = Rc::clone(&images);
            let onload = Closure::wrap(Box::new(move || {
                if latch.borrow_mut().complete_one()
                    && let Some(callback) = ready.borrow_mut().take()
                {
                    callback(&all);
                }
            }) as Box<dyn FnMut()>);
            image.set_onload(Some(onload.as_ref().unchecked_ref()));
            image.set_src(url);
            onloads.push(onload);
        }

        Ok(Self {
            images,
            latch,
            onloads,
        })
    }

    /// The image elements, in the order their URLs were given.
    #[must_use]
    pub fn images(&self) -> &[HtmlImageElement] {
        &self.images
    }

    /// Whether every asset has finished loading.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.latch.borrow().is_ready()
    }
}

impl Drop for ImageLoader {
    fn drop(&mut self) {
        for image in self.images.iter() {
            image.set_onload(None);
        }
        self.onloads.clear();
    }
}
