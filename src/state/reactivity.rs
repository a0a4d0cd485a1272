// ============================================================================
// REACTIVITY - Valor observable con subscribers (Rc<RefCell>)
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

type Callback = Rc<dyn Fn()>;

/// Estado reactivo compartido: los clones ven el mismo valor y los mismos subscribers
pub struct Observable<T> {
    value: Rc<RefCell<T>>,
    subscribers: Rc<RefCell<Vec<Callback>>>,
}

impl<T: Clone> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Copia del valor actual
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    /// Leer sin clonar
    pub fn with<R>(&self, reader: impl FnOnce(&T) -> R) -> R {
        reader(&self.value.borrow())
    }

    /// Establecer nuevo valor y notificar subscribers
    pub fn set(&self, new_value: T) {
        *self.value.borrow_mut() = new_value;
        self.notify();
    }

    /// Actualizar valor usando closure y notificar
    pub fn update<F>(&self, updater: F)
    where
        F: FnOnce(&mut T),
    {
        updater(&mut self.value.borrow_mut());
        self.notify();
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.subscribers.borrow_mut().push(Rc::new(callback));
    }

    // Se clona la lista: un callback puede suscribirse o leer el valor sin pánico de RefCell
    fn notify(&self) {
        let subscribers: Vec<Callback> = self.subscribers.borrow().clone();
        for callback in subscribers {
            callback();
        }
    }
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            subscribers: self.subscribers.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn clones_share_value_and_subscribers() {
        let original = Observable::new(1);
        let clone = original.clone();
        let hits = Rc::new(Cell::new(0));
        {
            let hits = hits.clone();
            original.subscribe(move || hits.set(hits.get() + 1));
        }

        clone.set(5);
        clone.update(|v| *v += 1);

        assert_eq!(original.get(), 6);
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn subscriber_can_read_value_during_notify() {
        let observable = Observable::new(String::from("a"));
        let seen = Rc::new(RefCell::new(String::new()));
        {
            let reader = observable.clone();
            let seen = seen.clone();
            observable.subscribe(move || *seen.borrow_mut() = reader.get());
        }
        observable.set("b".to_string());
        assert_eq!(*seen.borrow(), "b");
    }
}
