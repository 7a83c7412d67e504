pub mod mock_email_transport;
pub mod recording_view;

#[allow(unused_imports)]
pub use mock_email_transport::MockEmailTransport;
#[allow(unused_imports)]
pub use recording_view::RecordingView;
