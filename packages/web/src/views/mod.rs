mod home;
pub use home::Home;

mod video_player;
pub use video_player::VideoPlayer;
