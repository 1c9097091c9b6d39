use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Аргументы события: какое поле нужно перепроверить
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorsChangedArgs<F> {
    pub field: F,
}

/// Идентификатор подписки, нужен для отписки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Handler<F> = Rc<dyn Fn(&ErrorsChangedArgs<F>)>;

struct Registry<F> {
    next_id: u64,
    handlers: Vec<(SubscriptionId, Handler<F>)>,
}

/// Точка подписки "ошибки поля могли измениться"
///
/// Однопоточная: клоны разделяют один список обработчиков.
/// Событие не несёт сообщений, подписчик заново запрашивает ошибки поля.
pub struct ErrorsChanged<F> {
    registry: Rc<RefCell<Registry<F>>>,
}

impl<F> ErrorsChanged<F> {
    pub fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry {
                next_id: 0,
                handlers: Vec::new(),
            })),
        }
    }

    pub fn subscribe(&self, handler: impl Fn(&ErrorsChangedArgs<F>) + 'static) -> SubscriptionId {
        let mut registry = self.registry.borrow_mut();
        let id = SubscriptionId(registry.next_id);
        registry.next_id += 1;
        registry.handlers.push((id, Rc::new(handler)));
        id
    }

    /// Возвращает false, если подписки с таким id нет
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut registry = self.registry.borrow_mut();
        let before = registry.handlers.len();
        registry.handlers.retain(|(existing, _)| *existing != id);
        registry.handlers.len() != before
    }

    /// Вызвать всех подписчиков в порядке подписки
    pub fn notify(&self, field: F) {
        // Снимок списка: обработчик может подписываться и отписываться во время вызова
        let handlers: Vec<Handler<F>> = self
            .registry
            .borrow()
            .handlers
            .iter()
            .map(|(_, handler)| handler.clone())
            .collect();
        let args = ErrorsChangedArgs { field };
        for handler in handlers {
            handler(&args);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.registry.borrow().handlers.len()
    }
}

impl<F> Default for ErrorsChanged<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> Clone for ErrorsChanged<F> {
    fn clone(&self) -> Self {
        Self {
            registry: Rc::clone(&self.registry),
        }
    }
}

impl<F> fmt::Debug for ErrorsChanged<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorsChanged")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
