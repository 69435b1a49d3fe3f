use crate::models::K5Document;

/// Receiver of a form's outcome.
pub trait DocumentHost {
    fn on_create(&mut self, document: K5Document);

    fn on_close(&mut self);
}

/// Host backed by a pair of closures
pub struct CallbackHost<C, X>
where
    C: FnMut(K5Document),
    X: FnMut(),
{
    on_create: C,
    on_close: X,
}

impl<C, X> CallbackHost<C, X>
where
    C: FnMut(K5Document),
    X: FnMut(),
{
    pub fn new(on_create: C, on_close: X) -> Self {
        CallbackHost {
            on_create,
            on_close,
        }
    }
}

impl<C, X> DocumentHost for CallbackHost<C, X>
where
    C: FnMut(K5Document),
    X: FnMut(),
{
    fn on_create(&mut self, document: K5Document) {
        (self.on_create)(document)
    }

    fn on_close(&mut self) {
        (self.on_close)()
    }
}
