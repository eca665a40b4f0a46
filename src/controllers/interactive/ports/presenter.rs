use crate::controllers::interactive::events::render_event::RenderEvent;

pub trait RenderEventPort {
    fn present(&self, event: RenderEvent);
}

impl<P: RenderEventPort + ?Sized> RenderEventPort for &P {
    fn present(&self, event: RenderEvent) {
        (**self).present(event);
    }
}

/// Fans every event out to both ports, first then second.
impl<A: RenderEventPort, B: RenderEventPort> RenderEventPort for (A, B) {
    fn present(&self, event: RenderEvent) {
        self.0.present(event);
        self.1.present(event);
    }
}
