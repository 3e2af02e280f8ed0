//! Hotel form used by both `/hotel/new` and `/hotel/{id}/edit`.
//!
//! Wires the Yew `Component` implementation to its submodules:
//! - `state`: form values, selected files and the picture list of an edited hotel.
//! - `messages`: the `Msg` enum.
//! - `update`: validation, submission and picture actions.
//! - `view`: rendering.
//!
//! The form is validated with the same rules as the server before it is sent.
//! A new hotel goes out in one multipart request together with its pictures;
//! an existing one is replaced with `PUT`, and its pictures are re-indexed or
//! deleted one at a time.

use crate::api;
use yew::platform::spawn_local;
use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::HotelForm;

#[derive(Properties, PartialEq)]
pub struct HotelFormProps {
    /// `None` creates a new hotel.
    pub hotel_id: Option<i64>,
}

impl Component for HotelForm {
    type Message = Msg;
    type Properties = HotelFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        let hotel_id = ctx.props().hotel_id;
        if let Some(id) = hotel_id {
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::fetch_hotel(id).await {
                    Ok(hotel) => link.send_message(Msg::Loaded(hotel)),
                    Err(failure) => link.send_message(Msg::Failed(failure)),
                }
            });
        }
        HotelForm::new(hotel_id)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
