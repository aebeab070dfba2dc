pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;

pub use character::{Character, CharacterView, NewCharacter};
pub use favorite::{
    CharacterFavorite, CharacterFavoriteView, NewCharacterFavorite, NewPlanetFavorite, PlanetFavorite,
    PlanetFavoriteView,
};
pub use planet::{NewPlanet, Planet, PlanetView};
pub use user::{NewUser, User, UserView};
