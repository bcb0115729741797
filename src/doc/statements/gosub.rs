/*!
# `GOSUB <line>`

## Purpose
Call a subroutine.

## Remarks
Execution jumps to the given line after saving where it was. `RETURN`
resumes exactly after the `GOSUB`, even in the middle of a line. Calls
nest up to 64 deep; past that is OUT OF MEMORY. A target line that
does not exist is UNDEFINED LINE.

## Example
```text
10 GOSUB 100 : PRINT "WORLD"
20 END
100 PRINT "HELLO ";
110 RETURN
RUN
HELLO WORLD
```

*/
