use crate::api::ApiFailure;
use common::model::hotel::Hotel;
use common::model::picture::Picture;

pub enum Msg {
    Loaded(Hotel),
    SetField(&'static str, String),
    FilesSelected(Vec<web_sys::File>),
    Submit,
    Saved(Hotel),
    Failed(ApiFailure),
    SetPictureIndex(i64, String),
    SavePictureIndex(i64),
    PictureSaved(Picture),
    DeletePicture(i64),
    PictureDeleted(i64),
}
