//! Update function for the hotel form.
//!
//! Client-side validation runs the shared rules before anything is sent. Server
//! responses feed back through `Msg::Saved` and `Msg::Failed`; `422` messages
//! are listed above the form, everything else becomes the generic error.

use crate::api;
use crate::helpers::{confirm, navigate_after_toast, set_window_dirty_flag, show_toast, validation_messages};
use crate::route::Route;
use common::validation::{validate_hotel, validate_index};
use serde_json::Value;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::HotelForm;

pub fn update(component: &mut HotelForm, ctx: &Context<HotelForm>, msg: Msg) -> bool {
    match msg {
        Msg::Loaded(hotel) => {
            component.load(hotel);
            set_window_dirty_flag(false);
            true
        }
        Msg::SetField(field, value) => {
            component.values.insert(field, value);
            set_window_dirty_flag(component.is_dirty());
            true
        }
        Msg::FilesSelected(files) => {
            component.files = files;
            set_window_dirty_flag(component.is_dirty());
            true
        }
        Msg::Submit => {
            if component.submitting {
                return false;
            }
            let payload = component.payload();
            if let Err(errors) = validate_hotel(&payload) {
                component.errors = validation_messages(errors);
                return true;
            }

            component.errors.clear();
            component.submitting = true;
            let link = ctx.link().clone();
            match component.hotel_id {
                None => {
                    let files = component.files.clone();
                    spawn_local(async move {
                        match api::create_hotel_with_pictures(&payload, &files).await {
                            Ok(hotel) => link.send_message(Msg::Saved(hotel)),
                            Err(failure) => link.send_message(Msg::Failed(failure)),
                        }
                    });
                }
                Some(id) => {
                    spawn_local(async move {
                        match api::update_hotel(id, &payload).await {
                            Ok(hotel) => link.send_message(Msg::Saved(hotel)),
                            Err(failure) => link.send_message(Msg::Failed(failure)),
                        }
                    });
                }
            }
            true
        }
        Msg::Saved(hotel) => {
            component.submitting = false;
            component.files.clear();
            component.load(hotel.clone());
            set_window_dirty_flag(false);
            navigate_after_toast(Route::Detail(hotel.id).href(), "Hotel saved.");
            true
        }
        Msg::Failed(failure) => {
            component.submitting = false;
            component.loading = false;
            component.errors = failure.messages();
            true
        }
        Msg::SetPictureIndex(id, value) => {
            component.picture_indexes.insert(id, value);
            true
        }
        Msg::SavePictureIndex(id) => {
            let index = component.picture_indexes.get(&id).cloned().unwrap_or_default();
            if let Err(errors) = validate_index(&Value::String(index.clone())) {
                component.errors = validation_messages(errors);
                return true;
            }
            component.errors.clear();
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::update_picture_index(id, &index).await {
                    Ok(picture) => link.send_message(Msg::PictureSaved(picture)),
                    Err(failure) => link.send_message(Msg::Failed(failure)),
                }
            });
            false
        }
        Msg::PictureSaved(picture) => {
            let mut pictures = component.pictures.clone();
            if let Some(existing) = pictures.iter_mut().find(|p| p.id == picture.id) {
                *existing = picture;
            }
            common::model::picture::order_pictures(&mut pictures);
            component.set_pictures(pictures);
            show_toast("Picture order saved.");
            true
        }
        Msg::DeletePicture(id) => {
            if !confirm("Delete this picture?") {
                return false;
            }
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::delete_picture(id).await {
                    Ok(()) => link.send_message(Msg::PictureDeleted(id)),
                    Err(failure) => link.send_message(Msg::Failed(failure)),
                }
            });
            false
        }
        Msg::PictureDeleted(id) => {
            let pictures = component.pictures.iter().filter(|p| p.id != id).cloned().collect();
            component.set_pictures(pictures);
            show_toast("Picture deleted.");
            true
        }
    }
}
