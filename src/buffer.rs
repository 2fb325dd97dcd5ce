use std::mem::MaybeUninit;
use std::ptr;
use std::slice;

/// Contiguous storage whose slots `[0, len)` are initialised.
pub struct Buffer<T> {
    len: usize,
    data: Box<[MaybeUninit<T>]>,
}

impl<T> Buffer<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            len: 0,
            data: Box::new_uninit_slice(capacity),
        }
    }

    #[inline]
    pub fn push(&mut self, value: T) {
        self.insert(self.len(), value);
    }

    pub fn insert(&mut self, index: usize, value: T) {
        if index > self.len() {
            panic!("Index out of bounds: cannot insert at index {}", index);
        }

        if self.is_full() {
            panic!("Buffer is full: cannot insert more elements");
        }

        unsafe {
            let data_ptr = self.data.as_mut_ptr();

            // Shift elements starting from the index to the right
            ptr::copy(
                data_ptr.add(index),
                data_ptr.add(index + 1),
                self.len() - index,
            );

            data_ptr.add(index).write(MaybeUninit::new(value));
        }

        self.len += 1;
    }

    pub fn remove(&mut self, index: usize) -> T {
        if index >= self.len() {
            panic!("Index out of bounds: cannot remove at index {}", index);
        }

        let value = unsafe { self.data[index].assume_init_read() };

        unsafe {
            // Close the gap left at `index`
            let data_ptr = self.data.as_mut_ptr();
            ptr::copy(
                data_ptr.add(index + 1),
                data_ptr.add(index),
                self.len() - index - 1,
            );
        }

        self.len -= 1;
        value
    }

    /// Moves the live elements into a fresh allocation of `new_capacity` slots.
    ///
    /// The new storage is allocated before anything is moved, so the buffer is
    /// left untouched if the allocation fails.
    pub fn grow_to(&mut self, new_capacity: usize) {
        assert!(
            new_capacity >= self.capacity(),
            "Buffer cannot shrink from {} to {} slots",
            self.capacity(),
            new_capacity
        );

        let mut data = Box::new_uninit_slice(new_capacity);

        unsafe {
            ptr::copy_nonoverlapping(self.data.as_ptr(), data.as_mut_ptr(), self.len());
        }

        // Old slots are moved-from; `MaybeUninit` never drops them.
        self.data = data;
    }

    pub fn clear(&mut self) {
        let len = self.len;

        // Zero the length first so a panicking destructor cannot cause a double drop.
        self.len = 0;

        unsafe {
            let live = ptr::slice_from_raw_parts_mut(self.data.as_mut_ptr().cast::<T>(), len);
            ptr::drop_in_place(live);
        }
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.data.as_ptr().cast::<T>(), self.len) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.data.as_mut_ptr().cast::<T>(), self.len) }
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }
}

impl<T> Drop for Buffer<T> {
    fn drop(&mut self) {
        self.clear();
    }
}
